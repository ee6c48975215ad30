//! Run several terminators and report every failure.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::{AggregateError, ShutdownError};
use crate::ports::Terminator;

/// A terminator built from independent kill mechanisms.
///
/// Members run in order and a failure never stops the next member from
/// running. The result aggregates every member failure, or is `Ok` when
/// none failed.
#[derive(Clone, Default)]
pub struct CompositeTerminator {
    members: Vec<Arc<dyn Terminator>>,
}

impl CompositeTerminator {
    #[must_use]
    pub fn with(mut self, member: Arc<dyn Terminator>) -> Self {
        self.members.push(member);
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[async_trait]
impl Terminator for CompositeTerminator {
    async fn terminate(&self, cancel: &CancellationToken) -> Result<(), ShutdownError> {
        let mut errors = AggregateError::new();

        for member in &self.members {
            if let Err(e) = member.terminate(cancel).await {
                warn!("Termination step failed, continuing: {e}");
                errors.push(e);
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Step {
        calls: AtomicUsize,
        fail_with: Option<u32>,
    }

    impl Step {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_with: None,
            })
        }

        fn failing(pid: u32) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_with: Some(pid),
            })
        }

        fn count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Terminator for Step {
        async fn terminate(&self, _cancel: &CancellationToken) -> Result<(), ShutdownError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with {
                Some(pid) => Err(ShutdownError::Signal {
                    pid,
                    reason: "EPERM".into(),
                }),
                None => Ok(()),
            }
        }
    }

    fn aggregate_of(result: Result<(), ShutdownError>) -> AggregateError {
        match result {
            Err(ShutdownError::Aggregate(inner)) => inner,
            other => panic!("expected aggregate error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn all_members_succeed() {
        let a = Step::ok();
        let b = Step::ok();
        let composite = CompositeTerminator::default().with(a.clone()).with(b.clone());

        composite.terminate(&CancellationToken::new()).await.unwrap();
        assert_eq!((a.count(), b.count()), (1, 1));
    }

    #[tokio::test]
    async fn first_failure_does_not_stop_second_member() {
        let group = Step::failing(100);
        let sweep = Step::ok();
        let composite = CompositeTerminator::default()
            .with(group.clone())
            .with(sweep.clone());

        let errors = aggregate_of(composite.terminate(&CancellationToken::new()).await);

        assert_eq!(group.count(), 1);
        assert_eq!(sweep.count(), 1);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors.errors()[0], ShutdownError::Signal { pid: 100, .. }));
    }

    #[tokio::test]
    async fn second_failure_is_reported_alone() {
        let group = Step::ok();
        let sweep = Step::failing(200);
        let composite = CompositeTerminator::default()
            .with(group.clone())
            .with(sweep.clone());

        let errors = aggregate_of(composite.terminate(&CancellationToken::new()).await);

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors.errors()[0], ShutdownError::Signal { pid: 200, .. }));
    }

    #[tokio::test]
    async fn both_failures_are_kept_in_order() {
        let composite = CompositeTerminator::default()
            .with(Step::failing(1))
            .with(Step::failing(2));

        let errors = aggregate_of(composite.terminate(&CancellationToken::new()).await);

        let pids: Vec<u32> = errors
            .into_iter()
            .map(|e| match e {
                ShutdownError::Signal { pid, .. } => pid,
                other => panic!("unexpected cause {other}"),
            })
            .collect();
        assert_eq!(pids, vec![1, 2]);
    }

    #[tokio::test]
    async fn empty_composite_is_a_no_op() {
        let composite = CompositeTerminator::default();
        assert!(composite.is_empty());
        composite.terminate(&CancellationToken::new()).await.unwrap();
    }
}
