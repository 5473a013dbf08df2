use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::domain::errors::GuestError;
use crate::interface_adapters::exports::{pdf, spreadsheet};
use crate::interface_adapters::protocol::{
    BaseResponse, CheckGuestQuery, CheckGuestResponse, EventReportResponse, RegisterGuestRequest,
    ReportRowItem,
};
use crate::interface_adapters::state::{AppState, PostgresGuestRepository};
use crate::use_cases::check_guest::CheckGuestUseCase;
use crate::use_cases::event_report::{EventReport, EventReportUseCase};
use crate::use_cases::register_guest::RegisterGuestUseCase;
use crate::use_cases::reset_guests::ResetGuestsUseCase;

const REGISTERED_MESSAGE: &str = "Convidado foi registrado com sucesso";
const CHECKED_MESSAGE: &str = "Consulta realizada com sucesso.";
const REPORT_MESSAGE: &str = "Relatório gerado com sucesso.";
const RESET_MESSAGE: &str = "Convidados removidos com sucesso.";

// Handler for registering a guest with optional companions.
pub async fn register_guest(
    State(state): State<AppState>,
    Json(payload): Json<RegisterGuestRequest>,
) -> (StatusCode, Json<BaseResponse>) {
    let repo = PostgresGuestRepository {
        db: state.db.clone(),
    };
    let use_case = RegisterGuestUseCase { repo };

    match use_case.execute(payload).await {
        Ok(()) => envelope(StatusCode::CREATED, REGISTERED_MESSAGE.to_string()),
        Err(err) => failure_envelope(err, GuestErrorContext::Register),
    }
}

// Handler for the advisory name existence check.
pub async fn check_guest(
    State(state): State<AppState>,
    Query(query): Query<CheckGuestQuery>,
) -> (StatusCode, Json<CheckGuestResponse>) {
    let repo = PostgresGuestRepository {
        db: state.db.clone(),
    };
    let use_case = CheckGuestUseCase { repo };

    match use_case.execute(&query.name).await {
        Ok(exists) => (
            StatusCode::OK,
            Json(CheckGuestResponse {
                status_code: StatusCode::OK.as_u16(),
                message: CHECKED_MESSAGE.to_string(),
                exists,
            }),
        ),
        Err(err) => {
            let (status, Json(base)) = failure_envelope(err, GuestErrorContext::Check);
            (
                status,
                Json(CheckGuestResponse {
                    status_code: base.status_code,
                    message: base.message,
                    exists: false,
                }),
            )
        }
    }
}

// Handler for the confirmed-guest report.
pub async fn event_report(
    State(state): State<AppState>,
) -> (StatusCode, Json<EventReportResponse>) {
    match run_report(&state).await {
        Ok(report) => (
            StatusCode::OK,
            Json(report_response(StatusCode::OK, REPORT_MESSAGE.to_string(), report)),
        ),
        Err(err) => {
            // Failure keeps the same empty rows/zero total an empty event
            // produces; only the status code tells them apart.
            let (status, Json(base)) = failure_envelope(err, GuestErrorContext::Report);
            (
                status,
                Json(EventReportResponse {
                    status_code: base.status_code,
                    message: base.message,
                    guests: Vec::new(),
                    total_people: 0,
                }),
            )
        }
    }
}

// Handler for the spreadsheet export of the report.
pub async fn event_report_spreadsheet(State(state): State<AppState>) -> Response {
    match run_report(&state).await {
        Ok(report) => match spreadsheet::render(&report) {
            Ok(bytes) => attachment(
                "text/csv; charset=utf-8",
                "relatorio_convidados.csv",
                bytes,
            ),
            Err(cause) => {
                failure_envelope(GuestError::Storage(cause), GuestErrorContext::Report)
                    .into_response()
            }
        },
        Err(err) => failure_envelope(err, GuestErrorContext::Report).into_response(),
    }
}

// Handler for the PDF export of the report.
pub async fn event_report_pdf(State(state): State<AppState>) -> Response {
    match run_report(&state).await {
        Ok(report) => attachment(
            "application/pdf",
            "relatorio_convidados.pdf",
            pdf::render(&report),
        ),
        Err(err) => failure_envelope(err, GuestErrorContext::Report).into_response(),
    }
}

// Handler for the administrative bulk wipe.
pub async fn reset_guests(State(state): State<AppState>) -> (StatusCode, Json<BaseResponse>) {
    let repo = PostgresGuestRepository {
        db: state.db.clone(),
    };
    let use_case = ResetGuestsUseCase { repo };

    match use_case.execute().await {
        Ok(()) => envelope(StatusCode::OK, RESET_MESSAGE.to_string()),
        Err(err) => failure_envelope(err, GuestErrorContext::Reset),
    }
}

async fn run_report(state: &AppState) -> Result<EventReport, GuestError> {
    let repo = PostgresGuestRepository {
        db: state.db.clone(),
    };
    let use_case = EventReportUseCase { repo };
    use_case.execute().await
}

fn report_response(status: StatusCode, message: String, report: EventReport) -> EventReportResponse {
    EventReportResponse {
        status_code: status.as_u16(),
        message,
        guests: report
            .rows
            .into_iter()
            .map(|row| ReportRowItem {
                name: row.name,
                companions: row.companions,
            })
            .collect(),
        total_people: report.total_people,
    }
}

fn envelope(status: StatusCode, message: String) -> (StatusCode, Json<BaseResponse>) {
    (
        status,
        Json(BaseResponse {
            status_code: status.as_u16(),
            message,
        }),
    )
}

fn attachment(content_type: &'static str, filename: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

// Maps domain errors to the response envelope by endpoint context.
enum GuestErrorContext {
    Register,
    Check,
    Report,
    Reset,
}

impl GuestErrorContext {
    fn storage_prefix(&self) -> &'static str {
        match self {
            GuestErrorContext::Register => "adicionar o convidado",
            GuestErrorContext::Check => "verificar o convidado",
            GuestErrorContext::Report => "gerar o relatório",
            GuestErrorContext::Reset => "remover os convidados",
        }
    }
}

fn failure_envelope(
    err: GuestError,
    context: GuestErrorContext,
) -> (StatusCode, Json<BaseResponse>) {
    match err {
        GuestError::Storage(cause) => {
            warn!(error = %cause, "storage failure");
            envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Ocorreu um erro ao {}: {}", context.storage_prefix(), cause),
            )
        }
        validation => envelope(StatusCode::BAD_REQUEST, validation.to_string()),
    }
}
