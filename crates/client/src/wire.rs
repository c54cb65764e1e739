//! Wire DTOs for the legacy REST backend.
//!
//! The backend's JSON uses its historical field names (`banck`,
//! `moneyclean`, `fistName`, `documentsAprov`, ...); everything is
//! converted to the typed core records right at this boundary. The
//! document slots travel as a JSON document embedded in a string field on
//! the user payload.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trustbank_core::documents::types::{DocumentApprovalState, SlotStatus};
use trustbank_core::ledger::types::{Transaction, TransactionStatus};
use trustbank_core::profile::UserProfile;
use trustbank_core::session::types::Role;
use trustbank_shared::types::{TransactionId, UserId};
use trustbank_shared::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Transaction payload as the backend sends and expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDto {
    /// Timestamp-derived identifier.
    pub number: i64,
    /// Creation instant, formatted `YYYY-MM-DD HH:mm:ss`.
    pub date: String,
    pub description: String,
    pub amount: Decimal,
    /// Destination bank (historical spelling preserved).
    pub banck: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Nullable tri-state flag: null pending, "true" approved, "false"
    /// rejected.
    pub status: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl From<Transaction> for TransactionDto {
    fn from(tx: Transaction) -> Self {
        Self {
            number: tx.id.into_inner(),
            date: tx.created_at.format(DATE_FORMAT).to_string(),
            description: tx.description,
            amount: tx.amount,
            banck: tx.bank,
            kind: tx.kind,
            status: tx.status.to_wire().map(str::to_string),
            user_id: tx.owner.into_inner(),
        }
    }
}

impl TryFrom<TransactionDto> for Transaction {
    type Error = AppError;

    fn try_from(dto: TransactionDto) -> AppResult<Self> {
        let created_at = parse_date(&dto.date)?;
        Ok(Self {
            id: TransactionId::from_raw(dto.number),
            created_at,
            description: dto.description,
            amount: dto.amount,
            bank: dto.banck,
            kind: dto.kind,
            status: TransactionStatus::from_wire(dto.status.as_deref()),
            owner: UserId::from_raw(dto.user_id),
        })
    }
}

fn parse_date(s: &str) -> AppResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| AppError::Request(format!("malformed date in response: {e}")))
}

/// Converts a list of DTOs, failing on the first malformed entry.
pub fn transactions_from_wire(dtos: Vec<TransactionDto>) -> AppResult<Vec<Transaction>> {
    dtos.into_iter().map(Transaction::try_from).collect()
}

/// The embedded document-approval field, stored stringified on the user
/// record under its historical slot names (`foto`, `fromt`, `back`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DocumentsAprovDto {
    foto: Option<SlotValueDto>,
    fromt: Option<SlotValueDto>,
    back: Option<SlotValueDto>,
}

/// One slot value on the wire.
///
/// Records written by the old dashboard carry booleans (`false` awaiting a
/// decision, `true` approved) and the string `"refused"` for rejections;
/// newer records carry the status labels. Both are accepted on read, the
/// same alias treatment `DocumentSlot::parse` gives the slot names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SlotValueDto {
    Flag(bool),
    Label(String),
}

impl SlotValueDto {
    fn status(&self) -> SlotStatus {
        match self {
            Self::Flag(false) => SlotStatus::Pending,
            Self::Flag(true) => SlotStatus::Approved,
            Self::Label(s) if s == "refused" => SlotStatus::Rejected,
            Self::Label(s) => SlotStatus::from_wire(Some(s.as_str())),
        }
    }

    fn from_status(status: SlotStatus) -> Option<Self> {
        status.to_wire().map(|w| Self::Label(w.to_string()))
    }
}

fn slot_status(value: Option<&SlotValueDto>) -> SlotStatus {
    value.map_or(SlotStatus::Unsubmitted, SlotValueDto::status)
}

impl DocumentsAprovDto {
    fn decode(raw: Option<&str>) -> DocumentApprovalState {
        // Absent or unparseable means nothing was ever submitted.
        let dto: Self = raw
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default();
        DocumentApprovalState {
            photo: slot_status(dto.foto.as_ref()),
            id_front: slot_status(dto.fromt.as_ref()),
            id_back: slot_status(dto.back.as_ref()),
        }
    }

    fn encode(state: DocumentApprovalState) -> String {
        let dto = Self {
            foto: SlotValueDto::from_status(state.photo),
            fromt: SlotValueDto::from_status(state.id_front),
            back: SlotValueDto::from_status(state.id_back),
        };
        serde_json::to_string(&dto).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Role entry on the user payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolDto {
    pub name: String,
}

/// User payload as the backend sends and expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    /// Historical spelling preserved.
    #[serde(rename = "fistName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Available balance.
    pub moneyclean: Decimal,
    /// Stringified JSON document-approval field.
    #[serde(rename = "documentsAprov")]
    pub documents_aprov: Option<String>,
    #[serde(default)]
    pub rols: Vec<RolDto>,
}

impl From<UserProfile> for UserDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.into_inner(),
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            moneyclean: profile.balance,
            documents_aprov: Some(DocumentsAprovDto::encode(profile.documents)),
            rols: vec![RolDto {
                name: profile.role.as_str().to_string(),
            }],
        }
    }
}

impl From<UserDto> for UserProfile {
    fn from(dto: UserDto) -> Self {
        let role = dto
            .rols
            .iter()
            .find_map(|r| Role::parse(&r.name))
            .unwrap_or(Role::User);
        Self {
            id: UserId::from_raw(dto.id),
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            balance: dto.moneyclean,
            role,
            documents: DocumentsAprovDto::decode(dto.documents_aprov.as_deref()),
        }
    }
}

/// Body of the transactional create call: the new transaction plus the
/// already-debited owner record, persisted as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDebitedDto {
    pub transaction: TransactionDto,
    pub owner: UserDto,
}
