use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for TeamHub.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::employee::list_employees,
        crate::routes::employee::create_employee,
        crate::routes::employee::import_employees,
        crate::routes::employee::update_employee,
        crate::routes::employee::delete_employee,
        crate::routes::employee::set_employee_points,
        crate::routes::employee::award_employee_points,
        crate::routes::team::list_teams,
        crate::routes::team::create_team,
        crate::routes::team::update_team,
        crate::routes::team::delete_team,
        crate::routes::team::set_team_points,
        crate::routes::team::award_team_points,
        crate::routes::team::assign_member,
        crate::routes::team::remove_team_member,
        crate::routes::game::list_games,
        crate::routes::game::record_game,
        crate::routes::schedule::list_scheduled,
        crate::routes::schedule::schedule_activity,
        crate::routes::schedule::update_scheduled,
        crate::routes::schedule::delete_scheduled,
        crate::routes::workforce::list_workforce_teams,
        crate::routes::workforce::create_workforce_team,
        crate::routes::workforce::update_workforce_team,
        crate::routes::workforce::delete_workforce_team,
        crate::routes::workforce::add_workforce_member,
        crate::routes::workforce::remove_workforce_member,
        crate::routes::announcement::list_announcements,
        crate::routes::announcement::create_announcement,
        crate::routes::announcement::update_announcement,
        crate::routes::announcement::delete_announcement,
        crate::routes::announcement::react,
        crate::routes::daily::list_records,
        crate::routes::daily::get_record,
        crate::routes::daily::submit_ott,
        crate::routes::daily::edit_ott,
        crate::routes::daily::submit_mit,
        crate::routes::daily::edit_mit,
        crate::routes::activity::list_activities,
        crate::routes::activity::record_activity,
        crate::routes::admin::reconcile,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::MessageResponse,
            crate::dto::common::SetPointsRequest,
            crate::dto::common::AwardPointsRequest,
            crate::dto::employee::CreateEmployeeRequest,
            crate::dto::employee::UpdateEmployeeRequest,
            crate::dto::employee::ImportEmployeeInput,
            crate::dto::employee::ImportEmployeesRequest,
            crate::dto::employee::ImportEmployeesResponse,
            crate::dto::employee::EmployeeDto,
            crate::dto::team::CreateTeamRequest,
            crate::dto::team::UpdateTeamRequest,
            crate::dto::team::AddTeamMemberRequest,
            crate::dto::team::TeamMemberDto,
            crate::dto::team::TeamDto,
            crate::dto::game::RecordGameRequest,
            crate::dto::game::TeamScoreInput,
            crate::dto::game::EmployeeScoreInput,
            crate::dto::game::TeamScoreDto,
            crate::dto::game::EmployeeScoreDto,
            crate::dto::game::GameDto,
            crate::dto::schedule::ScheduleActivityRequest,
            crate::dto::schedule::UpdateScheduledActivityRequest,
            crate::dto::schedule::ScheduleTeamDto,
            crate::dto::schedule::ScheduledActivityDto,
            crate::dto::workforce::CreateWorkforceTeamRequest,
            crate::dto::workforce::UpdateWorkforceTeamRequest,
            crate::dto::workforce::AddWorkforceMemberRequest,
            crate::dto::workforce::WorkforceMemberDto,
            crate::dto::workforce::WorkforceTeamDto,
            crate::dto::announcement::CreateAnnouncementRequest,
            crate::dto::announcement::UpdateAnnouncementRequest,
            crate::dto::announcement::ReactionRequest,
            crate::dto::announcement::AnnouncementDto,
            crate::dto::daily::SubmitOttRequest,
            crate::dto::daily::SubmitMitRequest,
            crate::dto::daily::DailyTaskDto,
            crate::dto::activity::RecordActivityRequest,
            crate::dto::activity::ActivityDto,
            crate::dto::activity::ActivityPageDto,
            crate::dto::admin::ReconcileResponse,
            crate::dao::models::EmployeeRole,
            crate::dao::models::EmployeeStatus,
            crate::dao::models::ScheduleStatus,
            crate::dao::models::AnnouncementPriority,
            crate::dao::models::ActivityKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "employees", description = "Employee registry"),
        (name = "teams", description = "Scoring teams and rosters"),
        (name = "games", description = "Game ledger"),
        (name = "schedule", description = "Scheduled activities"),
        (name = "workforce", description = "Organisational teams"),
        (name = "announcements", description = "Announcement board"),
        (name = "daily-tasks", description = "Daily task planner"),
        (name = "activities", description = "Audit trail"),
        (name = "admin", description = "Maintenance operations"),
    )
)]
pub struct ApiDoc;
