use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a payment code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentCodeId(pub Uuid);

impl PaymentCodeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PaymentCodeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentCodeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Whether a payment code adds to or subtracts from an officer's pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    #[default]
    Income,
    Deduction,
}

/// Payment code reference record: one earnings or deduction heading that
/// salary line items point at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCode {
    #[serde(flatten)]
    pub base: BaseAggregate<PaymentCodeId>,

    #[serde(rename = "payCd")]
    pub pay_cd: String,
    pub kind: PaymentKind,
    pub taxable: bool,
}

impl PaymentCode {
    pub fn new_for_insert(
        code: String,
        description: String,
        pay_cd: String,
        kind: PaymentKind,
        taxable: bool,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(PaymentCodeId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            pay_cd,
            kind,
            taxable,
        }
    }

    pub fn update(&mut self, dto: &PaymentCodeDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.pay_cd = dto.pay_cd.clone();
        self.kind = dto.kind;
        self.taxable = dto.taxable;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.pay_cd.trim().is_empty() {
            return Err("Pay code must not be empty".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Description must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for PaymentCode {
    type Id = PaymentCodeId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "payment_code"
    }

    fn element_name() -> &'static str {
        "Payment code"
    }

    fn list_name() -> &'static str {
        "Payment codes"
    }
}

/// DTO for creating/updating a payment code
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentCodeDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "payCd")]
    pub pay_cd: String,
    pub kind: PaymentKind,
    #[serde(default)]
    pub taxable: bool,
    pub comment: Option<String>,
}
