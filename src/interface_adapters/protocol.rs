use serde::{Deserialize, Serialize};

use crate::domain::entities::Participation;

// Request payload for guest registration. Field names follow the public
// wire contract.
#[derive(Debug, Deserialize)]
pub struct RegisterGuestRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "iraAoRodizio", default)]
    pub attendance_confirmed: bool,
    #[serde(rename = "participacao")]
    pub participation: Participation,
    #[serde(rename = "quantidadeAcompanhantes", default)]
    pub companion_count: i32,
    #[serde(rename = "nomesAcompanhantes", default)]
    pub companion_names: Vec<String>,
}

// Query parameters for the existence check.
#[derive(Debug, Deserialize)]
pub struct CheckGuestQuery {
    #[serde(rename = "nome", default)]
    pub name: String,
}

// Base response envelope. Every endpoint mirrors this status code in the
// HTTP status line.
#[derive(Debug, Serialize)]
pub struct BaseResponse {
    #[serde(rename = "codigoStatus")]
    pub status_code: u16,
    #[serde(rename = "mensagem")]
    pub message: String,
}

// Envelope plus the existence flag.
#[derive(Debug, Serialize)]
pub struct CheckGuestResponse {
    #[serde(rename = "codigoStatus")]
    pub status_code: u16,
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "existe")]
    pub exists: bool,
}

// Envelope plus the report rows and deduplicated headcount.
#[derive(Debug, Serialize)]
pub struct EventReportResponse {
    #[serde(rename = "codigoStatus")]
    pub status_code: u16,
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "convidados")]
    pub guests: Vec<ReportRowItem>,
    #[serde(rename = "totalPessoas")]
    pub total_people: usize,
}

// One confirmed guest and the companion names they bring.
#[derive(Debug, Serialize)]
pub struct ReportRowItem {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "acompanhantes")]
    pub companions: Vec<String>,
}
