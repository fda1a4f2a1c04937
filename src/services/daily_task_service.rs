//! Daily planner operations.
//!
//! A record keyed `YYYY-MM-DD` holds the task list submitted the evening
//! before that day (OTT) and the focus task picked during it (MIT). All
//! submission endpoints take the *page* day the user is acting from: the
//! OTT track writes to the day after it, the MIT track to the day itself.

use std::time::SystemTime;

use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    dao::models::{ActivityKind, DailyTaskEntity},
    dto::daily::{DailyTaskDto, SubmitMitRequest, SubmitOttRequest},
    error::ServiceError,
    services::{activity_service, session::SessionContext},
    state::{
        SharedState,
        daily::{self, MitGateError, OttGateError},
    },
};

/// Fetch the record for one day.
///
/// Days nobody has written to yet come back as an empty record rather than
/// a 404, since the planner renders every day.
pub async fn get_record(state: &SharedState, date: String) -> Result<DailyTaskDto, ServiceError> {
    let store = state.require_store().await?;

    let key = daily::format_date(parse_page_date(&date)?);
    let record = store
        .find_daily_record(key.clone())
        .await?
        .unwrap_or_else(|| blank_record(key));
    Ok(DailyTaskDto::from(record))
}

/// List every stored record, oldest day first.
pub async fn list_records(state: &SharedState) -> Result<Vec<DailyTaskDto>, ServiceError> {
    let store = state.require_store().await?;

    let records = store.list_daily_records().await?;
    Ok(records.into_iter().map(DailyTaskDto::from).collect())
}

/// Submit tomorrow's task list from today's page.
pub async fn submit_ott(
    state: &SharedState,
    session: &SessionContext,
    date: String,
    payload: SubmitOttRequest,
) -> Result<DailyTaskDto, ServiceError> {
    let store = state.require_store().await?;
    let config = state.config();

    let page_date = parse_page_date(&date)?;
    let now = local_now(config.utc_offset_hours);
    daily::check_ott_submission(now, page_date, config.ott_cutoff_hour).map_err(
        |err| match err {
            OttGateError::WrongDate => ServiceError::InvalidInput(
                "tomorrow's tasks can only be submitted from today's page".to_owned(),
            ),
            OttGateError::DeadlinePassed => ServiceError::InvalidState(
                "the submission window for tomorrow's tasks has closed".to_owned(),
            ),
        },
    )?;

    let tasks = daily::non_blank_tasks(&payload.tasks);
    if tasks.is_empty() {
        return Err(ServiceError::InvalidInput(
            "at least one task is required".to_owned(),
        ));
    }

    let target = daily::format_date(daily::next_day(page_date));
    let mut record = store
        .find_daily_record(target.clone())
        .await?
        .unwrap_or_else(|| blank_record(target.clone()));
    record.ott = tasks;
    record.ott_submitted = true;
    record.updated_at = SystemTime::now();
    store.save_daily_record(record.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Submitted tasks for {target}"),
    )
    .await;

    Ok(DailyTaskDto::from(record))
}

/// Pick today's focus task from yesterday's submitted list.
pub async fn submit_mit(
    state: &SharedState,
    session: &SessionContext,
    date: String,
    payload: SubmitMitRequest,
) -> Result<DailyTaskDto, ServiceError> {
    let store = state.require_store().await?;
    let config = state.config();

    let page_date = parse_page_date(&date)?;
    let now = local_now(config.utc_offset_hours);
    daily::check_mit_submission(now, page_date, config.mit_open_hour, config.mit_close_hour)
        .map_err(|err| match err {
            MitGateError::WrongDate => ServiceError::InvalidInput(
                "the focus task can only be picked from today's page".to_owned(),
            ),
            MitGateError::TooEarly => {
                ServiceError::InvalidState("the focus task window has not opened yet".to_owned())
            }
            MitGateError::WindowClosed => {
                ServiceError::InvalidState("the focus task window has closed for today".to_owned())
            }
        })?;

    let source_key = daily::format_date(daily::previous_day(page_date));
    let source = store
        .find_daily_record(source_key)
        .await?
        .map(|record| daily::non_blank_tasks(&record.ott))
        .unwrap_or_default();
    if source.is_empty() {
        return Err(ServiceError::InvalidState(
            "no tasks were submitted yesterday".to_owned(),
        ));
    }

    let task = payload.task.trim().to_owned();
    if !source.contains(&task) {
        return Err(ServiceError::InvalidInput(
            "the focus task must be one of yesterday's submitted tasks".to_owned(),
        ));
    }

    let key = daily::format_date(page_date);
    let mut record = store
        .find_daily_record(key.clone())
        .await?
        .unwrap_or_else(|| blank_record(key.clone()));
    record.mit = Some(task);
    record.mit_submitted = true;
    record.updated_at = SystemTime::now();
    store.save_daily_record(record.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Picked focus task for {key}"),
    )
    .await;

    Ok(DailyTaskDto::from(record))
}

/// Reopen tomorrow's task list for editing from today's page.
///
/// Clears the submitted flag but keeps the stored entries until the next
/// submission overwrites them.
pub async fn edit_ott(
    state: &SharedState,
    session: &SessionContext,
    date: String,
) -> Result<DailyTaskDto, ServiceError> {
    let store = state.require_store().await?;

    let page_date = parse_page_date(&date)?;
    let target = daily::format_date(daily::next_day(page_date));
    let Some(mut record) = store.find_daily_record(target.clone()).await? else {
        return Err(ServiceError::NotFound(format!("no record for `{target}`")));
    };

    record.ott_submitted = false;
    record.updated_at = SystemTime::now();
    store.save_daily_record(record.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Reopened task list for {target}"),
    )
    .await;

    Ok(DailyTaskDto::from(record))
}

/// Reopen today's focus task pick from today's page.
pub async fn edit_mit(
    state: &SharedState,
    session: &SessionContext,
    date: String,
) -> Result<DailyTaskDto, ServiceError> {
    let store = state.require_store().await?;

    let key = daily::format_date(parse_page_date(&date)?);
    let Some(mut record) = store.find_daily_record(key.clone()).await? else {
        return Err(ServiceError::NotFound(format!("no record for `{key}`")));
    };

    record.mit_submitted = false;
    record.updated_at = SystemTime::now();
    store.save_daily_record(record.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Reopened focus task for {key}"),
    )
    .await;

    Ok(DailyTaskDto::from(record))
}

fn parse_page_date(value: &str) -> Result<Date, ServiceError> {
    daily::parse_date(value).ok_or_else(|| {
        ServiceError::InvalidInput(format!("invalid date `{value}`, expected YYYY-MM-DD"))
    })
}

fn local_now(utc_offset_hours: i8) -> OffsetDateTime {
    let offset = UtcOffset::from_hms(utc_offset_hours, 0, 0).unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}

fn blank_record(date: String) -> DailyTaskEntity {
    DailyTaskEntity {
        date,
        ott: Vec::new(),
        ott_submitted: false,
        mit: None,
        mit_submitted: false,
        updated_at: SystemTime::now(),
    }
}
