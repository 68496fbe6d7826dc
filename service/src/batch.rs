use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use domain::{
    model::{
        entity::{SubmissionConfig, TaskEntry, TaskState},
        vo::{FlagRule, HttpFailure, SubmissionTemplate, SubmitReceipt},
    },
    service::{JobSubmitter, SubmissionReporter, SubmitError, TaskCatalog},
};
use infrastructure::sync::isolated::{self, Exit};
use tracing::Instrument;

pub struct BatchSubmitState {
    template: SubmissionTemplate,
    flag_rules: Vec<FlagRule>,
}

impl BatchSubmitState {
    pub fn new(template: SubmissionTemplate, flag_rules: Vec<FlagRule>) -> Self {
        Self {
            template,
            flag_rules,
        }
    }
}

/// Submits every enabled catalog entry, one at a time, each in its own
/// isolated worker.
pub struct BatchSubmitService<Deps> {
    state: Arc<BatchSubmitState>,
    deps: Arc<Deps>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Submitted(SubmitReceipt),
    /// Rejected by the server, headers were reported
    Rejected(HttpFailure),
    /// The worker ended with an error other than an HTTP rejection
    Failed(String),
    Panicked(String),
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<(String, TaskOutcome)>,
}

impl<Deps> BatchSubmitService<Deps>
where
    Deps: TaskCatalog + JobSubmitter + SubmissionReporter + Send + Sync + 'static,
{
    pub fn new(state: BatchSubmitState, deps: Arc<Deps>) -> Self {
        Self {
            state: Arc::new(state),
            deps,
        }
    }

    /// Runs the whole batch. Stops early only when a submission process
    /// cannot be started or the reporter fails.
    pub async fn run(&self) -> anyhow::Result<BatchSummary> {
        let tasks = self.deps.enabled_tasks().await.context("Unable to list tasks")?;
        tracing::info!(count = tasks.len(), "Submitting batch");

        let mut summary = BatchSummary::default();
        for task in tasks {
            let outcome = self.submit_one(&task).await?;
            summary.outcomes.push((task.name, outcome));
        }
        Ok(summary)
    }

    async fn submit_one(&self, task: &TaskEntry) -> anyhow::Result<TaskOutcome> {
        let state = TaskState::Pending;
        self.deps.announce(task).await?;

        let config = self.state.template.render(task, &self.state.flag_rules);
        let state = state.advance();
        tracing::debug!(
            task = %task.name,
            %state,
            dataset = %config.data.input_dataset,
            params = ?config.cfg_params(),
            "Configuration rendered"
        );

        let span = tracing::info_span!("submission", task = %task.name);
        let exit = isolated::run(
            submission_worker(self.deps.clone(), task.clone(), config).instrument(span),
        )
        .await?;

        let outcome = match exit {
            Exit::Finished(Ok(outcome)) => outcome,
            Exit::Finished(Err(SubmitError::Spawn(e))) => {
                return Err(e).with_context(|| format!("Cannot submit task {}", task.name));
            }
            Exit::Finished(Err(e)) => {
                tracing::error!(task = %task.name, "Submission failed: {e:#}");
                TaskOutcome::Failed(format!("{e:#}"))
            }
            Exit::Panicked(msg) => {
                tracing::error!(task = %task.name, "Submission worker panicked: {msg}");
                TaskOutcome::Panicked(msg)
            }
        };

        let state = state.advance();
        tracing::info!(task = %task.name, %state, "{outcome}");
        Ok(outcome)
    }
}

/// Body of the isolated worker. Only HTTP rejections are handled here.
async fn submission_worker<Deps>(
    deps: Arc<Deps>,
    task: TaskEntry,
    config: SubmissionConfig,
) -> Result<TaskOutcome, SubmitError>
where
    Deps: JobSubmitter + SubmissionReporter + Send + Sync,
{
    match deps.submit(config).await {
        Ok(receipt) => Ok(TaskOutcome::Submitted(receipt)),
        Err(SubmitError::Http(failure)) => {
            deps.report_rejection(&task, &failure).await?;
            Ok(TaskOutcome::Rejected(failure))
        }
        Err(e) => Err(e),
    }
}

impl fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted(receipt) => match &receipt.task_name {
                Some(name) => write!(f, "Submitted as {name}"),
                None => f.write_str("Submitted"),
            },
            Self::Rejected(failure) => write!(f, "Rejected: {failure}"),
            Self::Failed(e) => write!(f, "Failed: {e}"),
            Self::Panicked(msg) => write!(f, "Panicked: {msg}"),
        }
    }
}

impl BatchSummary {
    pub fn submitted(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Submitted(_)))
    }

    pub fn rejected(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Rejected(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Failed(_) | TaskOutcome::Panicked(_)))
    }

    fn count(&self, f: impl Fn(&TaskOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| f(o)).count()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use domain::model::vo::CfgParam;
    use mockall::{mock, Sequence};

    use super::*;

    mock! {
        pub Deps {}

        #[async_trait]
        impl TaskCatalog for Deps {
            async fn enabled_tasks(&self) -> anyhow::Result<Vec<TaskEntry>>;
        }

        #[async_trait]
        impl JobSubmitter for Deps {
            async fn submit(&self, config: SubmissionConfig) -> Result<SubmitReceipt, SubmitError>;
        }

        #[async_trait]
        impl SubmissionReporter for Deps {
            async fn announce(&self, task: &TaskEntry) -> anyhow::Result<()>;
            async fn report_rejection(
                &self,
                task: &TaskEntry,
                failure: &HttpFailure,
            ) -> anyhow::Result<()>;
        }
    }

    fn service(deps: MockDeps) -> BatchSubmitService<MockDeps> {
        BatchSubmitService::new(
            BatchSubmitState::new(SubmissionTemplate::default(), vec![FlagRule::lhe_weights()]),
            Arc::new(deps),
        )
    }

    fn lhe_weights(config: &SubmissionConfig) -> Option<&str> {
        config
            .job_type
            .py_cfg_params
            .iter()
            .find(|p| p.key == "LHEWeights")
            .map(|p| p.value.as_str())
    }

    fn expect_submission(
        deps: &mut MockDeps,
        seq: &mut Sequence,
        name: &'static str,
        dataset: &'static str,
        flag: &'static str,
    ) {
        deps.expect_announce()
            .withf(move |task| task.name == name)
            .times(1)
            .in_sequence(seq)
            .returning(|_| Ok(()));
        deps.expect_submit()
            .withf(move |config| {
                config.general.request_name == name
                    && config.data.input_dataset == dataset
                    && lhe_weights(config) == Some(flag)
            })
            .times(1)
            .in_sequence(seq)
            .returning(|_| Ok(SubmitReceipt::default()));
    }

    #[tokio::test]
    async fn submits_in_declaration_order() {
        let mut deps = MockDeps::new();
        let mut seq = Sequence::new();
        deps.expect_enabled_tasks()
            .times(1)
            .returning(|| Ok(vec![TaskEntry::new("A", "/dsA"), TaskEntry::new("B", "/dsB")]));
        expect_submission(&mut deps, &mut seq, "A", "/dsA", "False");
        expect_submission(&mut deps, &mut seq, "B", "/dsB", "False");
        deps.expect_report_rejection().never();

        let summary = service(deps).run().await.unwrap();
        assert_eq!(summary.submitted(), 2);
        assert_eq!(summary.outcomes[0].0, "A");
        assert_eq!(summary.outcomes[1].0, "B");
    }

    #[tokio::test]
    async fn signal_sample_gets_lhe_weights() {
        let mut deps = MockDeps::new();
        let mut seq = Sequence::new();
        deps.expect_enabled_tasks().returning(|| {
            Ok(vec![
                TaskEntry::new("GluGluToHToTauTau_M-125", "/ds"),
                TaskEntry::new("ZZTo4L", "/zz"),
            ])
        });
        expect_submission(&mut deps, &mut seq, "GluGluToHToTauTau_M-125", "/ds", "True");
        expect_submission(&mut deps, &mut seq, "ZZTo4L", "/zz", "False");

        let summary = service(deps).run().await.unwrap();
        assert_eq!(summary.submitted(), 2);
    }

    #[tokio::test]
    async fn base_params_are_not_accumulated() {
        let mut deps = MockDeps::new();
        deps.expect_enabled_tasks().returning(|| {
            Ok(vec![
                TaskEntry::new("VBFHToTauTau_M-125", "/vbf"),
                TaskEntry::new("TT", "/tt"),
            ])
        });
        deps.expect_announce().returning(|_| Ok(()));
        deps.expect_submit()
            .withf(|config| {
                let params = &config.job_type.py_cfg_params;
                params.len() == 6
                    && params[..5] == SubmissionTemplate::default().base_params[..]
                    && params[5].key == "LHEWeights"
            })
            .times(2)
            .returning(|_| Ok(SubmitReceipt::default()));

        service(deps).run().await.unwrap();
    }

    #[tokio::test]
    async fn rejection_is_reported_and_batch_continues() {
        let mut deps = MockDeps::new();
        let mut seq = Sequence::new();
        deps.expect_enabled_tasks()
            .returning(|| Ok(vec![TaskEntry::new("A", "/dsA"), TaskEntry::new("B", "/dsB")]));

        deps.expect_announce()
            .withf(|task| task.name == "A")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        deps.expect_submit()
            .withf(|config| config.general.request_name == "A")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(SubmitError::Http(HttpFailure {
                    status: Some(400),
                    reason: Some("Bad Request".to_owned()),
                    headers: vec![("X-Error-Detail".to_owned(), "Invalid dataset".to_owned())],
                }))
            });
        deps.expect_report_rejection()
            .withf(|task, failure| {
                task.name == "A" && failure.header("X-Error-Detail") == Some("Invalid dataset")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        expect_submission(&mut deps, &mut seq, "B", "/dsB", "False");

        let summary = service(deps).run().await.unwrap();
        assert_eq!(summary.rejected(), 1);
        assert_eq!(summary.submitted(), 1);
        assert!(matches!(
            &summary.outcomes[0].1,
            TaskOutcome::Rejected(f) if f.status == Some(400)
        ));
    }

    #[tokio::test]
    async fn other_errors_end_the_worker_only() {
        let mut deps = MockDeps::new();
        deps.expect_enabled_tasks()
            .returning(|| Ok(vec![TaskEntry::new("A", "/dsA"), TaskEntry::new("B", "/dsB")]));
        deps.expect_announce().times(2).returning(|_| Ok(()));
        deps.expect_submit()
            .withf(|config| config.general.request_name == "A")
            .times(1)
            .returning(|_| Err(SubmitError::Other(anyhow::anyhow!("proxy expired"))));
        deps.expect_submit()
            .withf(|config| config.general.request_name == "B")
            .times(1)
            .returning(|_| Ok(SubmitReceipt::default()));
        deps.expect_report_rejection().never();

        let summary = service(deps).run().await.unwrap();
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.submitted(), 1);
        assert_eq!(summary.outcomes[0].1, TaskOutcome::Failed("proxy expired".to_owned()));
    }

    #[tokio::test]
    async fn failing_rejection_report_fails_the_task_only() {
        let mut deps = MockDeps::new();
        deps.expect_enabled_tasks()
            .returning(|| Ok(vec![TaskEntry::new("A", "/dsA"), TaskEntry::new("B", "/dsB")]));
        deps.expect_announce().times(2).returning(|_| Ok(()));
        deps.expect_submit()
            .withf(|config| config.general.request_name == "A")
            .times(1)
            .returning(|_| Err(SubmitError::Http(HttpFailure::default())));
        deps.expect_report_rejection()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("stdout closed")));
        deps.expect_submit()
            .withf(|config| config.general.request_name == "B")
            .times(1)
            .returning(|_| Ok(SubmitReceipt::default()));

        let summary = service(deps).run().await.unwrap();
        assert_eq!(summary.outcomes[0].1, TaskOutcome::Failed("stdout closed".to_owned()));
        assert_eq!(summary.submitted(), 1);
    }

    #[tokio::test]
    async fn spawn_failure_stops_the_batch() {
        let mut deps = MockDeps::new();
        deps.expect_enabled_tasks()
            .returning(|| Ok(vec![TaskEntry::new("A", "/dsA"), TaskEntry::new("B", "/dsB")]));
        deps.expect_announce()
            .withf(|task| task.name == "A")
            .times(1)
            .returning(|_| Ok(()));
        deps.expect_submit().times(1).returning(|_| {
            Err(SubmitError::Spawn(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "crab: command not found",
            )))
        });

        let err = service(deps).run().await.unwrap_err();
        assert!(format!("{err:#}").contains("Cannot submit task A"));
    }

    #[tokio::test]
    async fn empty_catalog_submits_nothing() {
        let mut deps = MockDeps::new();
        deps.expect_enabled_tasks().returning(|| Ok(vec![]));
        deps.expect_announce().never();
        deps.expect_submit().never();

        let summary = service(deps).run().await.unwrap();
        assert!(summary.outcomes.is_empty());
    }

    #[tokio::test]
    async fn custom_rules_are_appended_in_order() {
        let mut deps = MockDeps::new();
        deps.expect_enabled_tasks()
            .returning(|| Ok(vec![TaskEntry::new("EWKZ2Jets_ZToLL", "/ewk")]));
        deps.expect_announce().returning(|_| Ok(()));
        deps.expect_submit()
            .withf(|config| {
                config.job_type.py_cfg_params
                    == [CfgParam::flag("LHEWeights", false), CfgParam::flag("doVBF", true)]
            })
            .times(1)
            .returning(|_| Ok(SubmitReceipt::default()));

        let template = SubmissionTemplate {
            base_params: vec![],
            ..Default::default()
        };
        let rules = vec![
            FlagRule::lhe_weights(),
            FlagRule {
                param: "doVBF".to_owned(),
                name_contains: vec!["EWK".to_owned()],
            },
        ];
        BatchSubmitService::new(BatchSubmitState::new(template, rules), Arc::new(deps))
            .run()
            .await
            .unwrap();
    }

    /// Deps whose submitter panics for task `A`.
    #[derive(Default)]
    struct PanicOnA {
        announced: std::sync::Mutex<Vec<String>>,
        submitted: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TaskCatalog for PanicOnA {
        async fn enabled_tasks(&self) -> anyhow::Result<Vec<TaskEntry>> {
            Ok(vec![TaskEntry::new("A", "/dsA"), TaskEntry::new("B", "/dsB")])
        }
    }

    #[async_trait]
    impl JobSubmitter for PanicOnA {
        async fn submit(&self, config: SubmissionConfig) -> Result<SubmitReceipt, SubmitError> {
            let name = config.general.request_name;
            if name == "A" {
                panic!("boom in {name}");
            }
            self.submitted.lock().unwrap().push(name);
            Ok(SubmitReceipt::default())
        }
    }

    #[async_trait]
    impl SubmissionReporter for PanicOnA {
        async fn announce(&self, task: &TaskEntry) -> anyhow::Result<()> {
            self.announced.lock().unwrap().push(task.name.clone());
            Ok(())
        }

        async fn report_rejection(
            &self,
            _task: &TaskEntry,
            _failure: &HttpFailure,
        ) -> anyhow::Result<()> {
            panic!("no rejection expected")
        }
    }

    #[tokio::test]
    async fn worker_panic_is_contained() {
        let deps = Arc::new(PanicOnA::default());
        let service = BatchSubmitService::new(
            BatchSubmitState::new(SubmissionTemplate::default(), vec![FlagRule::lhe_weights()]),
            deps.clone(),
        );

        let summary = service.run().await.unwrap();
        assert_eq!(summary.outcomes.len(), 2);
        assert_eq!(
            summary.outcomes[0],
            ("A".to_owned(), TaskOutcome::Panicked("boom in A".to_owned()))
        );
        assert!(matches!(summary.outcomes[1].1, TaskOutcome::Submitted(_)));
        assert_eq!(summary.failed(), 1);
        assert_eq!(*deps.announced.lock().unwrap(), ["A", "B"]);
        assert_eq!(*deps.submitted.lock().unwrap(), ["B"]);
    }
}
