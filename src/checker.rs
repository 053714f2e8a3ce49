//! Update checking and scheduling
//!
//! [`UpdateChecker`] ties a [`VersionResolver`] to the comparison engine: one
//! check cycle resolves the distributed version, classifies it against the
//! current version, caches the resulting [`UpdateStatus`], and notifies the
//! completion callback. [`UpdateChecker::spawn`] runs the first cycle
//! immediately on a background task and then repeats on a fixed interval.
//!
//! Overlapping cycles (a manual [`check_now`](UpdateChecker::check_now) racing
//! a scheduled one) are permitted; the last status write wins.

use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime};

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{error, info, warn};

use crate::config::{CheckerConfig, DEFAULT_CHECK_INTERVAL_MS, DEFAULT_FETCH_TIMEOUT_MS};
use crate::resolver::{SpigotResolver, VersionResolver};
use crate::version::error::VersionError;
use crate::version::scheme::VersionScheme;
use crate::version::status::UpdateStatus;

type CompleteAction = Box<dyn Fn(&UpdateStatus) + Send + Sync>;
type ErrorHandler = Box<dyn Fn(&VersionError) + Send + Sync>;

/// Periodic update checker for one published resource
pub struct UpdateChecker {
    resource_id: u64,
    current_version: String,
    timeout: Duration,
    check_interval: Duration,
    repeating: bool,
    scheme: Option<VersionScheme>,
    resolver: Arc<dyn VersionResolver>,
    on_complete: Option<CompleteAction>,
    on_error: Option<ErrorHandler>,
    last_status: RwLock<Option<UpdateStatus>>,
    last_check: RwLock<Option<SystemTime>>,
}

impl UpdateChecker {
    /// Start configuring a checker for `resource_id`, whose installed version
    /// is `current_version`.
    pub fn builder(current_version: impl Into<String>, resource_id: u64) -> UpdateCheckerBuilder {
        UpdateCheckerBuilder {
            resource_id,
            current_version: current_version.into(),
            timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            check_interval: Duration::from_millis(DEFAULT_CHECK_INTERVAL_MS),
            repeating: true,
            scheme: None,
            resolver: None,
            on_complete: None,
            on_error: None,
        }
    }

    /// Run one check cycle and return the resulting status.
    ///
    /// A resolver failure is absorbed into a [`Failed`] status rather than an
    /// error: the distributed version simply could not be obtained. Scheme
    /// errors are returned to the caller untouched and leave the cached
    /// status unchanged.
    ///
    /// [`Failed`]: crate::version::status::Status::Failed
    pub async fn check_now(&self) -> Result<UpdateStatus, VersionError> {
        let distributed = match self
            .resolver
            .resolve(self.resource_id, self.timeout)
            .await
        {
            Ok(version) => Some(version),
            Err(e) => {
                warn!(
                    "Failed to resolve distributed version for resource {}: {}",
                    self.resource_id, e
                );
                None
            }
        };

        let status = UpdateStatus::build(
            distributed.as_deref(),
            &self.current_version,
            self.scheme,
        )?;

        *self.last_status.write().expect("status lock poisoned") = Some(status.clone());
        *self.last_check.write().expect("check time lock poisoned") = Some(SystemTime::now());

        if let Some(on_complete) = &self.on_complete {
            on_complete(&status);
        }

        info!(
            "Update check for resource {} finished: {:?}",
            self.resource_id,
            status.status()
        );

        Ok(status)
    }

    /// Run an immediate check on a background task, then repeat on the
    /// configured interval while repeating checks are enabled.
    ///
    /// Cycle errors go to the error handler, or to the error log when none
    /// was configured.
    ///
    /// Keep another `Arc` clone around to query [`last_status`] later:
    /// `Arc::clone(&checker).spawn()`.
    ///
    /// [`last_status`]: UpdateChecker::last_status
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run_cycle().await;

            if !self.repeating {
                return;
            }

            let mut ticker =
                time::interval_at(Instant::now() + self.check_interval, self.check_interval);

            loop {
                ticker.tick().await;
                self.run_cycle().await;
            }
        })
    }

    async fn run_cycle(&self) {
        if let Err(e) = self.check_now().await {
            match &self.on_error {
                Some(on_error) => on_error(&e),
                None => error!(
                    "Update check for resource {} failed: {}",
                    self.resource_id, e
                ),
            }
        }
    }

    /// The status produced by the most recent completed check, if any.
    pub fn last_status(&self) -> Option<UpdateStatus> {
        self.last_status
            .read()
            .expect("status lock poisoned")
            .clone()
    }

    /// When the most recent check completed, if any.
    pub fn last_check(&self) -> Option<SystemTime> {
        *self.last_check.read().expect("check time lock poisoned")
    }

    pub fn resource_id(&self) -> u64 {
        self.resource_id
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }
}

/// Builder for [`UpdateChecker`]
pub struct UpdateCheckerBuilder {
    resource_id: u64,
    current_version: String,
    timeout: Duration,
    check_interval: Duration,
    repeating: bool,
    scheme: Option<VersionScheme>,
    resolver: Option<Arc<dyn VersionResolver>>,
    on_complete: Option<CompleteAction>,
    on_error: Option<ErrorHandler>,
}

impl UpdateCheckerBuilder {
    /// Override the resolver. Defaults to [`SpigotResolver`].
    pub fn resolver(mut self, resolver: Arc<dyn VersionResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Upper bound on a single fetch. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Interval between repeating checks. Defaults to 2 hours.
    pub fn check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    /// Whether checks repeat after the initial one. Defaults to true.
    pub fn repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    /// Assert a version scheme instead of detecting one per check.
    pub fn scheme(mut self, scheme: VersionScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Callback invoked with the status of every completed check.
    pub fn on_complete(mut self, action: impl Fn(&UpdateStatus) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(action));
        self
    }

    /// Handler invoked when a check cycle fails with a scheme error.
    pub fn on_error(mut self, handler: impl Fn(&VersionError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// Take interval, timeout, and repeat settings from a deserialized
    /// [`CheckerConfig`].
    pub fn apply_config(mut self, config: &CheckerConfig) -> Self {
        self.check_interval = Duration::from_millis(config.check_interval);
        self.timeout = Duration::from_millis(config.timeout);
        self.repeating = config.repeating;
        self
    }

    pub fn build(self) -> Result<UpdateChecker, VersionError> {
        if self.current_version.is_empty() {
            return Err(VersionError::MissingArgument("current version"));
        }

        Ok(UpdateChecker {
            resource_id: self.resource_id,
            current_version: self.current_version,
            timeout: self.timeout,
            check_interval: self.check_interval,
            repeating: self.repeating,
            scheme: self.scheme,
            resolver: self
                .resolver
                .unwrap_or_else(|| Arc::new(SpigotResolver::default())),
            on_complete: self.on_complete,
            on_error: self.on_error,
            last_status: RwLock::new(None),
            last_check: RwLock::new(None),
        })
    }
}
