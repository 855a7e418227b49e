use axum::http::StatusCode;
use standard_error::{StandardError, Status};
use validator::{Validate, ValidateEmail};

use crate::{
    pkg::{
        internal::{
            adaptors::applications::{
                mutators::{ApplicationMutator, CreateApplicationData},
                selectors::ApplicationSelector,
                spec::{ApplicationEntry, ApplicationStatus, ApplicationWithJob},
            },
            adaptors::jobs::selectors::JobSelector,
            auth::CurrentUser,
            decision::{self, DecisionAction},
            email::{SendEmail, application::ApplicationNotice, connection::ConnectionNotice},
            validate,
        },
        server::{
            handlers::applications::ApplyInput,
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

pub struct SubmitOutcome {
    pub application: ApplicationEntry,
    pub creator_name: String,
}

/// Who is allowed to decide an application: the bearer of an unconsumed
/// decision token, or the job owner with a live session.
pub enum DecisionAuth {
    Token(String),
    Owner(CurrentUser),
}

/// Creates the application plus its decision-token pair in one transaction,
/// then notifies the job owner. The notification is fire-and-forget; the
/// submission has already committed by the time it leaves.
pub async fn submit_application(
    state: &AppState,
    user: &CurrentUser,
    job_id: &str,
    input: ApplyInput,
) -> Result<SubmitOutcome> {
    input
        .validate()
        .map_err(|e| validate::validation_err(&e.to_string()))?;
    let profile_links = validate::normalize_links(&input.profile_links)?;
    if let Some(phone) = &input.phone_number {
        validate::check_phone(phone)?;
    }
    if !user.email.validate_email() {
        return Err(validate::validation_err("applicant email is not valid"));
    }

    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobSelector::new(&mut tx)
        .get_active_with_owner(job_id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-JOB-001").code(StatusCode::NOT_FOUND))?;

    let application = ApplicationMutator::new(&mut tx)
        .create(CreateApplicationData {
            job_id: job.id.clone(),
            applicant_user_id: user.user_id.clone(),
            applicant_email: user.email.clone(),
            applicant_name: user.name.clone(),
            profile_links: profile_links.clone(),
            application_message: input.application_message.clone(),
            phone_number: input.phone_number.clone(),
        })
        .await?;

    let links = decision::issue_pair(&mut tx, &application.id, &job.profile_id).await?;
    tx.commit().await?;

    ApplicationNotice {
        job_title: job.title.clone(),
        owner_name: job.owner_name.clone(),
        applicant_name: application.applicant_name.clone(),
        applicant_email: application.applicant_email.clone(),
        message: application.application_message.clone(),
        profile_links,
        accept_url: links.accept_url,
        reject_url: links.reject_url,
    }
    .send(&job.owner_email)?;

    tracing::info!("{} applied to job {}", &user.user_id, &job.id);
    Ok(SubmitOutcome {
        application,
        creator_name: job.owner_name,
    })
}

/// Token consumption and the status write share a transaction: a failed
/// transition rolls the consume back, and a concurrent click on the same
/// link loses the conditional update race.
pub async fn decide_application(
    state: &AppState,
    application_id: &str,
    action: DecisionAction,
    auth: DecisionAuth,
) -> Result<ApplicationWithJob> {
    let mut tx = state.db_pool.begin_txn().await?;
    let application = ApplicationSelector::new(&mut tx)
        .get_with_job(application_id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-APP-001").code(StatusCode::NOT_FOUND))?;

    match &auth {
        DecisionAuth::Token(raw) => {
            decision::verify_and_consume(&mut tx, raw, application_id, action).await?;
        }
        DecisionAuth::Owner(user) => {
            if user.user_id != application.owner_id {
                return Err(StandardError::new("ERR-AUTH-002").code(StatusCode::FORBIDDEN));
            }
        }
    }

    let target = match action {
        DecisionAction::Accept => ApplicationStatus::Accepted,
        DecisionAction::Reject => ApplicationStatus::Rejected,
    };
    let rows = ApplicationMutator::new(&mut tx)
        .set_status(application_id, target)
        .await?;
    if rows == 0 {
        return Err(StandardError::new("ERR-APP-003").code(StatusCode::CONFLICT));
    }
    tx.commit().await?;

    if action == DecisionAction::Accept {
        let notice = ConnectionNotice {
            job_title: application.job_title.clone(),
            owner_name: application.owner_name.clone(),
            owner_email: application.owner_email.clone(),
            applicant_name: application.applicant_name.clone(),
            applicant_email: application.applicant_email.clone(),
        };
        notice.send(&application.owner_email)?;
        notice.send(&application.applicant_email)?;
    }

    tracing::info!("application {} {}ed", application_id, action.as_str());
    Ok(application)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    #[traced_test]
    async fn test_decide_unknown_application() -> Result<()> {
        let state = AppState::new().await?;
        let _ = decide_application(
            &state,
            &Uuid::new_v4().to_string(),
            DecisionAction::Accept,
            DecisionAuth::Token("not-a-real-token".into()),
        )
        .await;
        Ok(())
    }
}
