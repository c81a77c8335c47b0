use crate::common::*;

#[doc = r#"
    Liveness flag of one chart render.

    Fetches are never aborted. A chart service checks the token once a response
    has arrived and drops the result when the chart was discarded meanwhile.
"#]
#[derive(Debug, Clone, Default)]
pub struct DisposalToken {
    disposed: Arc<AtomicBool>,
}

impl DisposalToken {
    pub fn new() -> Self {
        DisposalToken::default()
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        !self.disposed.load(Ordering::SeqCst)
    }

    #[doc = "True when both tokens belong to the same render"]
    pub fn same_as(&self, other: &DisposalToken) -> bool {
        Arc::ptr_eq(&self.disposed, &other.disposed)
    }
}
