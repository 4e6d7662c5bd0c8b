use std::sync::{Arc, Mutex};

use accounts_client::{AccountError, AccountErrorKind, SignUpOptions};

use crate::{
    client::AccountClient,
    eligibility,
    form::{self, FieldId, FormPayload, ValidationResult},
    metrics::{Event, Metrics},
    router::{Route, Router},
    session::{Prefill, SessionStore},
};

/// Message shown next to the form when the address already belongs to
/// a verified account. The sign-in route is part of the wording.
pub const SUGGEST_SIGN_IN_MESSAGE: &str = "Account already exists. Sign in at /signin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Validating,
    Submitting,
}

/// What the sign-up entry point shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The form, with any prefill carried over from another screen.
    Form { prefill: Prefill },
    /// This session was already rejected: the terminal step has been
    /// navigated to and no form is shown.
    Blocked,
}

/// How the service answered an eligible submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Fresh account, confirmation email on its way.
    Created,
    /// The address belongs to a verified account. No navigation: the
    /// caller shows [`SUGGEST_SIGN_IN_MESSAGE`] and keeps the form up.
    ExistingVerified,
    /// The address belonged to an unverified account, which was signed
    /// up again with the new password and a fresh confirmation email.
    ExistingUnverifiedRecreated,
    /// The user backed out mid-flight. Telemetry only, nothing shown.
    Canceled,
    /// Classified service error, kind preserved for the caller to
    /// render.
    ServerError(AccountError),
}

/// What one [`SignUpFlow::submit`] call amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// A submission was already in flight: this one was dropped.
    Ignored,
    /// Local validation failed: show the message next to the field.
    Rejected {
        field: FieldId,
        message: &'static str,
    },
    /// The user is too young. The terminal step has been navigated to
    /// and the rejection recorded on the session.
    Ineligible,
    Completed(SubmissionOutcome),
}

/// Drives a sign-up attempt from raw form input to a routed outcome.
///
/// One instance backs one sign-up screen. At most one submission runs
/// at a time; a submit while one is in flight is dropped, not queued.
pub struct SignUpFlow {
    session: SessionStore,
    client: Arc<dyn AccountClient + Send + Sync>,
    router: Arc<dyn Router + Send + Sync>,
    metrics: Arc<dyn Metrics + Send + Sync>,
    phase: Mutex<Phase>,
}

// Puts the flow back to idle when a submission ends, including when
// its future is dropped mid-flight on screen teardown.
struct PhaseReset<'a> {
    flow: &'a SignUpFlow,
}

impl Drop for PhaseReset<'_> {
    fn drop(&mut self) {
        self.flow.set_phase(Phase::Idle);
    }
}

impl SignUpFlow {
    pub fn new(
        session: SessionStore,
        client: Arc<dyn AccountClient + Send + Sync>,
        router: Arc<dyn Router + Send + Sync>,
        metrics: Arc<dyn Metrics + Send + Sync>,
    ) -> Self {
        Self {
            session,
            client,
            router,
            metrics,
            phase: Mutex::new(Phase::Idle),
        }
    }

    /// Entry point, called before the form is rendered. A session that
    /// was already rejected goes straight back to the terminal step.
    pub fn load(&self) -> Entry {
        if eligibility::rejection_recorded(&self.session) {
            tracing::info!("sign-up: session was already rejected, redirecting");
            self.router.navigate(Route::CannotCreateAccount);
            return Entry::Blocked;
        }
        Entry::Form {
            prefill: self.session.prefill(),
        }
    }

    /// Whether a submission is currently being worked on.
    pub fn is_processing(&self) -> bool {
        *self.phase.lock().expect("poisoned") != Phase::Idle
    }

    /// Takes one sign-up attempt through validation, the age gate and
    /// the accounts service. Navigation and telemetry happen before
    /// this returns; the caller only renders the result.
    pub async fn submit(&self, payload: FormPayload) -> SubmitResult {
        if !self.begin() {
            tracing::debug!("sign-up: submission already in flight, dropping");
            return SubmitResult::Ignored;
        }
        let _reset = PhaseReset { flow: self };

        let now_year = eligibility::current_year();
        if let ValidationResult::Invalid { field, message } = form::validate(&payload, now_year) {
            tracing::debug!(
                "sign-up: validation failed on {}: {}",
                field.as_str(),
                message
            );
            self.metrics
                .log_event(Event::ValidationError { field, message });
            return SubmitResult::Rejected { field, message };
        }

        let birth_year = match payload.birth_year {
            Some(year) => year,
            // Validation rejects a missing year before this point.
            None => {
                return SubmitResult::Rejected {
                    field: FieldId::Age,
                    message: form::BIRTH_YEAR_REQUIRED_MESSAGE,
                }
            }
        };
        let age = eligibility::compute_age(birth_year, now_year);
        if eligibility::record_rejection_if_ineligible(&self.session, age) {
            tracing::info!("sign-up: user is below the minimum age, redirecting");
            self.router.navigate(Route::CannotCreateAccount);
            return SubmitResult::Ineligible;
        }

        self.set_phase(Phase::Submitting);
        let options = SignUpOptions::default();
        let outcome = match self
            .client
            .sign_up(&payload.email, &payload.password, &options)
            .await
        {
            Ok(response) if response.verified => {
                tracing::info!("sign-up: address belongs to a verified account");
                SubmissionOutcome::ExistingVerified
            }
            Ok(response) if response.existing => {
                // The address had an unverified account. Signing up
                // again resets its password and sends a fresh
                // confirmation email.
                tracing::info!("sign-up: address had an unverified account, signing up again");
                match self
                    .client
                    .sign_up(&payload.email, &payload.password, &options)
                    .await
                {
                    Ok(response) => {
                        tracing::debug!("sign-up: account re-signed up, uid {}", response.uid);
                        self.router.navigate(Route::Confirm);
                        SubmissionOutcome::ExistingUnverifiedRecreated
                    }
                    Err(e) => self.classify_failure(e),
                }
            }
            Ok(response) => {
                tracing::debug!("sign-up: account created, uid {}", response.uid);
                self.router.navigate(Route::Confirm);
                SubmissionOutcome::Created
            }
            Err(e) => self.classify_failure(e),
        };
        SubmitResult::Completed(outcome)
    }

    fn classify_failure(&self, error: AccountError) -> SubmissionOutcome {
        if error.kind == AccountErrorKind::UserCanceledLogin {
            tracing::info!("sign-up: canceled by the user");
            self.metrics.log_event(Event::LoginCanceled);
            SubmissionOutcome::Canceled
        } else {
            tracing::warn!("sign-up failed: {}", error);
            SubmissionOutcome::ServerError(error)
        }
    }

    fn begin(&self) -> bool {
        let mut phase = self.phase.lock().expect("poisoned");
        if *phase != Phase::Idle {
            return false;
        }
        *phase = Phase::Validating;
        true
    }

    fn set_phase(&self, next: Phase) {
        *self.phase.lock().expect("poisoned") = next;
    }
}
