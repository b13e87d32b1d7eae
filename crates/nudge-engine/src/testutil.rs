//! Shared fakes for engine tests.

use std::sync::Mutex;

use async_trait::async_trait;

use nudge_core::channel::{ChatClient, ChatError};

/// Records every outbound message; optionally fails pushes to specific
/// conversation ids so failure-isolation behavior can be exercised.
#[derive(Default)]
pub struct RecordingChat {
    pub pushes: Mutex<Vec<(String, String)>>,
    pub replies: Mutex<Vec<(String, String)>>,
    pub fail_push_to: Mutex<Vec<String>>,
}

impl RecordingChat {
    pub fn pushed(&self) -> Vec<(String, String)> {
        self.pushes.lock().unwrap().clone()
    }

    pub fn replied(&self) -> Vec<(String, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for RecordingChat {
    async fn push_message(&self, to: &str, text: &str) -> Result<(), ChatError> {
        if self.fail_push_to.lock().unwrap().iter().any(|g| g == to) {
            return Err("push rejected".into());
        }
        self.pushes
            .lock()
            .unwrap()
            .push((to.to_string(), text.to_string()));
        Ok(())
    }

    async fn reply_message(&self, reply_token: &str, text: &str) -> Result<(), ChatError> {
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_string(), text.to_string()));
        Ok(())
    }
}
