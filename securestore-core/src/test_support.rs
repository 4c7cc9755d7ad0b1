//! Test helpers shared by unit tests.

use std::sync::{Arc, Mutex};

use crate::biometric::BiometricAuthenticator;

pub struct StubBiometric {
    available: bool,
    approve: bool,
    prompts: Mutex<Vec<String>>,
}

impl StubBiometric {
    pub fn new(available: bool, approve: bool) -> Arc<Self> {
        Arc::new(Self {
            available,
            approve,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn approving() -> Arc<Self> {
        Self::new(true, true)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BiometricAuthenticator for StubBiometric {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn authenticate(&self, reason: String) -> bool {
        self.prompts.lock().unwrap().push(reason);
        self.approve
    }
}
