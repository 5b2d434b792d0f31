use std::panic::{self, AssertUnwindSafe};
use std::thread;

use tokio::sync::{mpsc, oneshot};

use crate::client::KiCadClient;
use crate::error::KiCadError;
use crate::kicad::KiCad;
use crate::log;
use crate::model::common::VersionInfo;
use crate::proto::ApiMessage;

const WORKER_QUEUE_CAPACITY: usize = 64;

type Job = Box<dyn FnOnce(&KiCadClient) + Send>;
type JobOutcome<T> = thread::Result<Result<T, KiCadError>>;

/// Async front end over [`KiCadClient`].
///
/// Calls are queued to one worker thread that owns the blocking client, so
/// awaiting never blocks the runtime. A panic raised by a call (for example a
/// reply of the wrong type) is resumed in the awaiting task.
#[derive(Clone, Debug)]
pub struct KiCadClientAsync {
    job_tx: mpsc::Sender<Job>,
}

impl KiCadClientAsync {
    /// Connects with defaults and environment overrides.
    pub async fn connect() -> Result<Self, KiCadError> {
        let client = tokio::task::spawn_blocking(KiCadClient::connect)
            .await
            .map_err(|err| KiCadError::RuntimeJoin(err.to_string()))??;
        Self::new(client)
    }

    /// Moves `client` onto a dedicated worker thread.
    pub fn new(client: KiCadClient) -> Result<Self, KiCadError> {
        let (job_tx, mut job_rx) = mpsc::channel::<Job>(WORKER_QUEUE_CAPACITY);

        let worker_name = format!("kipy-worker-{}", std::process::id());
        thread::Builder::new()
            .name(worker_name)
            .spawn(move || {
                while let Some(job) = job_rx.blocking_recv() {
                    job(&client);
                }
                log::debug!("async worker stopped");
            })
            .map_err(|err| KiCadError::RuntimeJoin(err.to_string()))?;

        Ok(Self { job_tx })
    }

    /// Runs `call` against the blocking client on the worker thread.
    ///
    /// Use this to reach the facades, e.g.
    /// `client.run(|c| KiCad::from_client(c.clone()).get_board()?.get_tracks())`.
    pub async fn run<F, T>(&self, call: F) -> Result<T, KiCadError>
    where
        F: FnOnce(&KiCadClient) -> Result<T, KiCadError> + Send + 'static,
        T: Send + 'static,
    {
        let (outcome_tx, outcome_rx) = oneshot::channel::<JobOutcome<T>>();
        let job: Job = Box::new(move |client| {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| call(client)));
            let _ = outcome_tx.send(outcome);
        });

        self.job_tx
            .send(job)
            .await
            .map_err(|_| KiCadError::RuntimeJoin("async worker is not running".to_string()))?;

        match outcome_rx.await {
            Ok(Ok(result)) => result,
            Ok(Err(payload)) => panic::resume_unwind(payload),
            Err(_) => Err(KiCadError::RuntimeJoin(
                "async worker dropped the call".to_string(),
            )),
        }
    }

    /// See [`KiCadClient::send`].
    pub async fn send<C, R>(&self, command: C) -> Result<R, KiCadError>
    where
        C: ApiMessage + Send + 'static,
        R: ApiMessage + Send + 'static,
    {
        self.run(move |client| client.send::<C, R>(&command)).await
    }

    /// See [`KiCadClient::execute`].
    pub async fn execute<C>(&self, command: C) -> Result<(), KiCadError>
    where
        C: ApiMessage + Send + 'static,
    {
        self.run(move |client| client.execute(&command)).await
    }

    pub async fn ping(&self) -> Result<(), KiCadError> {
        self.run(|client| KiCad::from_client(client.clone()).ping())
            .await
    }

    pub async fn get_version(&self) -> Result<VersionInfo, KiCadError> {
        self.run(|client| KiCad::from_client(client.clone()).get_version())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::KiCadClientAsync;
    use crate::error::KiCadError;
    use crate::kicad::KiCad;
    use crate::mock::{self, MockHost};
    use crate::proto::common::commands as common_commands;
    use crate::proto::common::types as common_types;
    use crate::proto::common::ApiStatusCode;

    fn version_host() -> MockHost {
        MockHost::new(|request| match mock::command_name(request) {
            "kiapi.common.commands.GetVersion" => mock::ok(&common_commands::GetVersionResponse {
                version: Some(common_types::KiCadVersion {
                    major: 9,
                    minor: 0,
                    patch: 0,
                    full_version: "9.0.0".to_string(),
                }),
            }),
            "kiapi.common.commands.Ping" => mock::ok_empty(),
            _ => mock::status(ApiStatusCode::AsUnhandled, "unhandled"),
        })
    }

    #[tokio::test]
    async fn get_version_runs_on_the_worker() {
        let client = KiCadClientAsync::new(mock::client(version_host())).expect("worker");
        client.ping().await.expect("ping");
        let version = client.get_version().await.expect("version");
        assert_eq!(version.full_version, "9.0.0");
    }

    #[tokio::test]
    async fn status_errors_are_returned() {
        let client = KiCadClientAsync::new(mock::client(version_host())).expect("worker");
        let err = client
            .execute(common_commands::ClearSelection::default())
            .await
            .expect_err("unhandled command should fail");
        assert_eq!(err.status_code(), Some(ApiStatusCode::AsUnhandled));
    }

    #[tokio::test]
    async fn run_reaches_the_facades() {
        let client = KiCadClientAsync::new(mock::client(version_host())).expect("worker");
        let result = client
            .run(|client| KiCad::from_client(client.clone()).get_board())
            .await;
        assert!(matches!(result, Err(KiCadError::ApiStatus { .. })));
    }

    #[tokio::test]
    #[should_panic(expected = "payload type mismatch")]
    async fn contract_panics_reach_the_caller() {
        let client = KiCadClientAsync::new(mock::client(version_host())).expect("worker");
        let _ = client
            .send::<_, common_commands::RunActionResponse>(common_commands::GetVersion {})
            .await;
    }

    #[tokio::test]
    async fn worker_survives_a_panicking_call() {
        let client = KiCadClientAsync::new(mock::client(version_host())).expect("worker");
        let handle = {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .send::<_, common_commands::RunActionResponse>(common_commands::GetVersion {})
                    .await
            })
        };
        assert!(handle.await.is_err());
        client.ping().await.expect("worker should keep serving");
    }
}
