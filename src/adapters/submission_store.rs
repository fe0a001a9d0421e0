use chrono::{DateTime, Utc};
use formkit_core::Values;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One accepted form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub values: Values,
}

/// In-memory, bounded log of accepted submissions. Lost on restart.
#[derive(Clone)]
pub struct SubmissionStore {
    submissions: Arc<RwLock<VecDeque<Submission>>>,
    capacity: usize,
}

impl SubmissionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            submissions: Arc::new(RwLock::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Records `values`, evicting the oldest entry when full
    pub async fn push(&self, values: Values) -> Submission {
        let submission = Submission {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            values,
        };

        let mut submissions = self.submissions.write().await;
        while submissions.len() >= self.capacity {
            submissions.pop_front();
        }
        submissions.push_back(submission.clone());
        submission
    }

    /// Oldest first
    pub async fn list(&self) -> Vec<Submission> {
        let submissions = self.submissions.read().await;
        submissions.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_SUBMISSIONS)
    }
}
