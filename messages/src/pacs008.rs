//! pacs.008 — FI-to-FI customer credit transfer (subset)
//!
//! Record definitions with the constraint metadata the message schema
//! declares: length bounds, patterns, digit facets, occurrence counts and
//! code sets. Every record carries a static descriptor table and implements
//! [`Record`] so the validation engine can traverse instances generically.

use chrono::{NaiveDate, NaiveDateTime};
use iso20022_core::{
    Constraint, EnumCode, EnumDescriptor, FieldDescriptor, FieldView, Record, RecordDescriptor,
    TypeTag,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const CURRENCY_PATTERN: &str = "[A-Z]{3,3}";
const COUNTRY_PATTERN: &str = "[A-Z]{2,2}";
const BICFI_PATTERN: &str = "[A-Z0-9]{4,4}[A-Z]{2,2}[A-Z0-9]{2,2}([A-Z0-9]{3,3}){0,1}";
const UETR_PATTERN: &str =
    "[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}";
const NB_OF_TXS_PATTERN: &str = "[0-9]{1,15}";

/// SettlementMethod1Code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementMethod {
    /// Settled on the instructed agent's books
    Inda,
    /// Settled on the instructing agent's books
    Inga,
    /// Settled through a cover payment
    Cove,
    /// Settled through a clearing system
    Clrg,
}

pub static SETTLEMENT_METHOD: EnumDescriptor = EnumDescriptor {
    name: "SettlementMethod1Code",
    members: &["INDA", "INGA", "COVE", "CLRG"],
};

impl EnumCode for SettlementMethod {
    fn descriptor() -> &'static EnumDescriptor {
        &SETTLEMENT_METHOD
    }

    fn code(&self) -> &'static str {
        match self {
            SettlementMethod::Inda => "INDA",
            SettlementMethod::Inga => "INGA",
            SettlementMethod::Cove => "COVE",
            SettlementMethod::Clrg => "CLRG",
        }
    }
}

/// ChargeBearerType1Code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeBearerType {
    /// Borne by the debtor
    Debt,
    /// Borne by the creditor
    Cred,
    /// Shared
    Shar,
    /// Following service level
    Slev,
}

pub static CHARGE_BEARER_TYPE: EnumDescriptor = EnumDescriptor {
    name: "ChargeBearerType1Code",
    members: &["DEBT", "CRED", "SHAR", "SLEV"],
};

impl EnumCode for ChargeBearerType {
    fn descriptor() -> &'static EnumDescriptor {
        &CHARGE_BEARER_TYPE
    }

    fn code(&self) -> &'static str {
        match self {
            ChargeBearerType::Debt => "DEBT",
            ChargeBearerType::Cred => "CRED",
            ChargeBearerType::Shar => "SHAR",
            ChargeBearerType::Slev => "SLEV",
        }
    }
}

/// ActiveCurrencyAndAmount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveCurrencyAndAmount {
    pub value: Option<Decimal>,
    pub ccy: Option<String>,
}

pub static ACTIVE_CURRENCY_AND_AMOUNT: RecordDescriptor = RecordDescriptor {
    name: "ActiveCurrencyAndAmount",
    fields: &[
        FieldDescriptor {
            name: "value",
            xml_name: None,
            type_tag: TypeTag::Decimal,
            multivalued: false,
            constraints: &[
                Constraint::Required(true),
                Constraint::MinInclusive(dec!(0)),
                Constraint::TotalDigits(18),
                Constraint::FractionDigits(5),
            ],
            default: None,
        },
        FieldDescriptor {
            name: "ccy",
            xml_name: Some("Ccy"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::Required(true), Constraint::Pattern(CURRENCY_PATTERN)],
            default: None,
        },
    ],
};

impl Record for ActiveCurrencyAndAmount {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &ACTIVE_CURRENCY_AND_AMOUNT
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_decimal(&self.value),
            1 => FieldView::opt_text(&self.ccy),
            _ => unreachable!("field index out of range for ActiveCurrencyAndAmount"),
        }
    }
}

/// PaymentIdentification7
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIdentification {
    pub instr_id: Option<String>,
    pub end_to_end_id: Option<String>,
    pub tx_id: Option<String>,
    pub uetr: Option<String>,
}

pub static PAYMENT_IDENTIFICATION: RecordDescriptor = RecordDescriptor {
    name: "PaymentIdentification",
    fields: &[
        FieldDescriptor {
            name: "instr_id",
            xml_name: Some("InstrId"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::MinLength(1), Constraint::MaxLength(35)],
            default: None,
        },
        FieldDescriptor {
            name: "end_to_end_id",
            xml_name: Some("EndToEndId"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[
                Constraint::Required(true),
                Constraint::MinLength(1),
                Constraint::MaxLength(35),
            ],
            default: None,
        },
        FieldDescriptor {
            name: "tx_id",
            xml_name: Some("TxId"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::MinLength(1), Constraint::MaxLength(35)],
            default: None,
        },
        FieldDescriptor {
            name: "uetr",
            xml_name: Some("UETR"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::Pattern(UETR_PATTERN)],
            default: None,
        },
    ],
};

impl Record for PaymentIdentification {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &PAYMENT_IDENTIFICATION
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_text(&self.instr_id),
            1 => FieldView::opt_text(&self.end_to_end_id),
            2 => FieldView::opt_text(&self.tx_id),
            3 => FieldView::opt_text(&self.uetr),
            _ => unreachable!("field index out of range for PaymentIdentification"),
        }
    }
}

/// SettlementInstruction7 (method only)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementInstruction {
    pub sttlm_mtd: Option<SettlementMethod>,
}

pub static SETTLEMENT_INSTRUCTION: RecordDescriptor = RecordDescriptor {
    name: "SettlementInstruction",
    fields: &[FieldDescriptor {
        name: "sttlm_mtd",
        xml_name: Some("SttlmMtd"),
        type_tag: TypeTag::Enum(&SETTLEMENT_METHOD),
        multivalued: false,
        constraints: &[Constraint::Required(true)],
        default: None,
    }],
};

impl Record for SettlementInstruction {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &SETTLEMENT_INSTRUCTION
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_code(&self.sttlm_mtd),
            _ => unreachable!("field index out of range for SettlementInstruction"),
        }
    }
}

/// GroupHeader93 (subset)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupHeader {
    pub msg_id: Option<String>,
    pub cre_dt_tm: Option<NaiveDateTime>,
    pub nb_of_txs: Option<String>,
    pub ttl_intr_bk_sttlm_amt: Option<ActiveCurrencyAndAmount>,
    pub intr_bk_sttlm_dt: Option<NaiveDate>,
    pub sttlm_inf: Option<SettlementInstruction>,
}

pub static GROUP_HEADER: RecordDescriptor = RecordDescriptor {
    name: "GroupHeader",
    fields: &[
        FieldDescriptor {
            name: "msg_id",
            xml_name: Some("MsgId"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[
                Constraint::Required(true),
                Constraint::MinLength(1),
                Constraint::MaxLength(35),
            ],
            default: None,
        },
        FieldDescriptor {
            name: "cre_dt_tm",
            xml_name: Some("CreDtTm"),
            type_tag: TypeTag::DateTime,
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "nb_of_txs",
            xml_name: Some("NbOfTxs"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::Required(true), Constraint::Pattern(NB_OF_TXS_PATTERN)],
            default: None,
        },
        FieldDescriptor {
            name: "ttl_intr_bk_sttlm_amt",
            xml_name: Some("TtlIntrBkSttlmAmt"),
            type_tag: TypeTag::Record("ActiveCurrencyAndAmount"),
            multivalued: false,
            constraints: &[],
            default: None,
        },
        FieldDescriptor {
            name: "intr_bk_sttlm_dt",
            xml_name: Some("IntrBkSttlmDt"),
            type_tag: TypeTag::Date,
            multivalued: false,
            constraints: &[],
            default: None,
        },
        FieldDescriptor {
            name: "sttlm_inf",
            xml_name: Some("SttlmInf"),
            type_tag: TypeTag::Record("SettlementInstruction"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
    ],
};

impl Record for GroupHeader {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &GROUP_HEADER
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_text(&self.msg_id),
            1 => FieldView::opt_datetime(&self.cre_dt_tm),
            2 => FieldView::opt_text(&self.nb_of_txs),
            3 => FieldView::opt_record(&self.ttl_intr_bk_sttlm_amt),
            4 => FieldView::opt_date(&self.intr_bk_sttlm_dt),
            5 => FieldView::opt_record(&self.sttlm_inf),
            _ => unreachable!("field index out of range for GroupHeader"),
        }
    }
}

/// FinancialInstitutionIdentification18 (subset)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialInstitutionIdentification {
    pub bicfi: Option<String>,
    pub nm: Option<String>,
}

pub static FINANCIAL_INSTITUTION_IDENTIFICATION: RecordDescriptor = RecordDescriptor {
    name: "FinancialInstitutionIdentification",
    fields: &[
        FieldDescriptor {
            name: "bicfi",
            xml_name: Some("BICFI"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::Pattern(BICFI_PATTERN)],
            default: None,
        },
        FieldDescriptor {
            name: "nm",
            xml_name: Some("Nm"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::MinLength(1), Constraint::MaxLength(140)],
            default: None,
        },
    ],
};

impl Record for FinancialInstitutionIdentification {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &FINANCIAL_INSTITUTION_IDENTIFICATION
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_text(&self.bicfi),
            1 => FieldView::opt_text(&self.nm),
            _ => unreachable!("field index out of range for FinancialInstitutionIdentification"),
        }
    }
}

/// BranchAndFinancialInstitutionIdentification6 (subset)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchAndFinancialInstitutionIdentification {
    pub fin_instn_id: Option<FinancialInstitutionIdentification>,
}

pub static BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION: RecordDescriptor = RecordDescriptor {
    name: "BranchAndFinancialInstitutionIdentification",
    fields: &[FieldDescriptor {
        name: "fin_instn_id",
        xml_name: Some("FinInstnId"),
        type_tag: TypeTag::Record("FinancialInstitutionIdentification"),
        multivalued: false,
        constraints: &[Constraint::Required(true)],
        default: None,
    }],
};

impl Record for BranchAndFinancialInstitutionIdentification {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_record(&self.fin_instn_id),
            _ => unreachable!(
                "field index out of range for BranchAndFinancialInstitutionIdentification"
            ),
        }
    }
}

/// PostalAddress24 (subset)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostalAddress {
    pub strt_nm: Option<String>,
    pub twn_nm: Option<String>,
    pub ctry: Option<String>,
    pub adr_line: Vec<String>,
}

pub static POSTAL_ADDRESS: RecordDescriptor = RecordDescriptor {
    name: "PostalAddress",
    fields: &[
        FieldDescriptor {
            name: "strt_nm",
            xml_name: Some("StrtNm"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::MinLength(1), Constraint::MaxLength(70)],
            default: None,
        },
        FieldDescriptor {
            name: "twn_nm",
            xml_name: Some("TwnNm"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::MinLength(1), Constraint::MaxLength(35)],
            default: None,
        },
        FieldDescriptor {
            name: "ctry",
            xml_name: Some("Ctry"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::Pattern(COUNTRY_PATTERN)],
            default: None,
        },
        FieldDescriptor {
            name: "adr_line",
            xml_name: Some("AdrLine"),
            type_tag: TypeTag::Text,
            multivalued: true,
            constraints: &[
                Constraint::MinLength(1),
                Constraint::MaxLength(70),
                Constraint::MaxOccurs(7),
            ],
            default: None,
        },
    ],
};

impl Record for PostalAddress {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &POSTAL_ADDRESS
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_text(&self.strt_nm),
            1 => FieldView::opt_text(&self.twn_nm),
            2 => FieldView::opt_text(&self.ctry),
            3 => FieldView::text_list(&self.adr_line),
            _ => unreachable!("field index out of range for PostalAddress"),
        }
    }
}

/// PartyIdentification135 (subset)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyIdentification {
    pub nm: Option<String>,
    pub pstl_adr: Option<PostalAddress>,
}

pub static PARTY_IDENTIFICATION: RecordDescriptor = RecordDescriptor {
    name: "PartyIdentification",
    fields: &[
        FieldDescriptor {
            name: "nm",
            xml_name: Some("Nm"),
            type_tag: TypeTag::Text,
            multivalued: false,
            constraints: &[Constraint::MinLength(1), Constraint::MaxLength(140)],
            default: None,
        },
        FieldDescriptor {
            name: "pstl_adr",
            xml_name: Some("PstlAdr"),
            type_tag: TypeTag::Record("PostalAddress"),
            multivalued: false,
            constraints: &[],
            default: None,
        },
    ],
};

impl Record for PartyIdentification {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &PARTY_IDENTIFICATION
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_text(&self.nm),
            1 => FieldView::opt_record(&self.pstl_adr),
            _ => unreachable!("field index out of range for PartyIdentification"),
        }
    }
}

/// RemittanceInformation16 (unstructured only)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemittanceInformation {
    pub ustrd: Vec<String>,
}

pub static REMITTANCE_INFORMATION: RecordDescriptor = RecordDescriptor {
    name: "RemittanceInformation",
    fields: &[FieldDescriptor {
        name: "ustrd",
        xml_name: Some("Ustrd"),
        type_tag: TypeTag::Text,
        multivalued: true,
        constraints: &[Constraint::MinLength(1), Constraint::MaxLength(140)],
        default: None,
    }],
};

impl Record for RemittanceInformation {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &REMITTANCE_INFORMATION
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::text_list(&self.ustrd),
            _ => unreachable!("field index out of range for RemittanceInformation"),
        }
    }
}

/// CreditTransferTransaction39 (subset)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditTransferTransaction {
    pub pmt_id: Option<PaymentIdentification>,
    pub intr_bk_sttlm_amt: Option<ActiveCurrencyAndAmount>,
    pub chrg_br: Option<ChargeBearerType>,
    pub dbtr: Option<PartyIdentification>,
    pub dbtr_agt: Option<BranchAndFinancialInstitutionIdentification>,
    pub cdtr_agt: Option<BranchAndFinancialInstitutionIdentification>,
    pub cdtr: Option<PartyIdentification>,
    pub rmt_inf: Option<RemittanceInformation>,
}

pub static CREDIT_TRANSFER_TRANSACTION: RecordDescriptor = RecordDescriptor {
    name: "CreditTransferTransaction",
    fields: &[
        FieldDescriptor {
            name: "pmt_id",
            xml_name: Some("PmtId"),
            type_tag: TypeTag::Record("PaymentIdentification"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "intr_bk_sttlm_amt",
            xml_name: Some("IntrBkSttlmAmt"),
            type_tag: TypeTag::Record("ActiveCurrencyAndAmount"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "chrg_br",
            xml_name: Some("ChrgBr"),
            type_tag: TypeTag::Enum(&CHARGE_BEARER_TYPE),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "dbtr",
            xml_name: Some("Dbtr"),
            type_tag: TypeTag::Record("PartyIdentification"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "dbtr_agt",
            xml_name: Some("DbtrAgt"),
            type_tag: TypeTag::Record("BranchAndFinancialInstitutionIdentification"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "cdtr_agt",
            xml_name: Some("CdtrAgt"),
            type_tag: TypeTag::Record("BranchAndFinancialInstitutionIdentification"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "cdtr",
            xml_name: Some("Cdtr"),
            type_tag: TypeTag::Record("PartyIdentification"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "rmt_inf",
            xml_name: Some("RmtInf"),
            type_tag: TypeTag::Record("RemittanceInformation"),
            multivalued: false,
            constraints: &[],
            default: None,
        },
    ],
};

impl Record for CreditTransferTransaction {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &CREDIT_TRANSFER_TRANSACTION
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_record(&self.pmt_id),
            1 => FieldView::opt_record(&self.intr_bk_sttlm_amt),
            2 => FieldView::opt_code(&self.chrg_br),
            3 => FieldView::opt_record(&self.dbtr),
            4 => FieldView::opt_record(&self.dbtr_agt),
            5 => FieldView::opt_record(&self.cdtr_agt),
            6 => FieldView::opt_record(&self.cdtr),
            7 => FieldView::opt_record(&self.rmt_inf),
            _ => unreachable!("field index out of range for CreditTransferTransaction"),
        }
    }
}

/// FIToFICustomerCreditTransferV08 (subset)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiToFiCustomerCreditTransfer {
    pub grp_hdr: Option<GroupHeader>,
    pub cdt_trf_tx_inf: Vec<CreditTransferTransaction>,
}

pub static FI_TO_FI_CUSTOMER_CREDIT_TRANSFER: RecordDescriptor = RecordDescriptor {
    name: "FiToFiCustomerCreditTransfer",
    fields: &[
        FieldDescriptor {
            name: "grp_hdr",
            xml_name: Some("GrpHdr"),
            type_tag: TypeTag::Record("GroupHeader"),
            multivalued: false,
            constraints: &[Constraint::Required(true)],
            default: None,
        },
        FieldDescriptor {
            name: "cdt_trf_tx_inf",
            xml_name: Some("CdtTrfTxInf"),
            type_tag: TypeTag::Record("CreditTransferTransaction"),
            multivalued: true,
            constraints: &[Constraint::MinOccurs(1)],
            default: None,
        },
    ],
};

impl Record for FiToFiCustomerCreditTransfer {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &FI_TO_FI_CUSTOMER_CREDIT_TRANSFER
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_record(&self.grp_hdr),
            1 => FieldView::record_list(&self.cdt_trf_tx_inf),
            _ => unreachable!("field index out of range for FiToFiCustomerCreditTransfer"),
        }
    }
}

/// Document root for pacs.008
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub fi_to_fi_cstmr_cdt_trf: Option<FiToFiCustomerCreditTransfer>,
}

pub static DOCUMENT: RecordDescriptor = RecordDescriptor {
    name: "Document",
    fields: &[FieldDescriptor {
        name: "fi_to_fi_cstmr_cdt_trf",
        xml_name: Some("FIToFICstmrCdtTrf"),
        type_tag: TypeTag::Record("FiToFiCustomerCreditTransfer"),
        multivalued: false,
        constraints: &[Constraint::Required(true)],
        default: None,
    }],
};

impl Record for Document {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &DOCUMENT
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => FieldView::opt_record(&self.fi_to_fi_cstmr_cdt_trf),
            _ => unreachable!("field index out of range for Document"),
        }
    }
}

/// A fully-populated, constraint-satisfying single-transaction message.
///
/// Mirrors the kind of sample messages the message-construction tooling
/// produces; used by validation tests as a known-good graph.
#[must_use]
pub fn sample_document() -> Document {
    let agent = |bic: &str| BranchAndFinancialInstitutionIdentification {
        fin_instn_id: Some(FinancialInstitutionIdentification {
            bicfi: Some(bic.to_string()),
            nm: None,
        }),
    };
    Document {
        fi_to_fi_cstmr_cdt_trf: Some(FiToFiCustomerCreditTransfer {
            grp_hdr: Some(GroupHeader {
                msg_id: Some("MSGID-20240105-0001".to_string()),
                cre_dt_tm: NaiveDate::from_ymd_opt(2024, 1, 5)
                    .and_then(|d| d.and_hms_opt(9, 30, 0)),
                nb_of_txs: Some("1".to_string()),
                ttl_intr_bk_sttlm_amt: Some(ActiveCurrencyAndAmount {
                    value: Some(dec!(1500.00)),
                    ccy: Some("USD".to_string()),
                }),
                intr_bk_sttlm_dt: NaiveDate::from_ymd_opt(2024, 1, 5),
                sttlm_inf: Some(SettlementInstruction {
                    sttlm_mtd: Some(SettlementMethod::Clrg),
                }),
            }),
            cdt_trf_tx_inf: vec![CreditTransferTransaction {
                pmt_id: Some(PaymentIdentification {
                    instr_id: Some("INSTRID0001".to_string()),
                    end_to_end_id: Some("E2E-REF-0001".to_string()),
                    tx_id: Some("TXID0001".to_string()),
                    uetr: Some("550e8400-e29b-41d4-a716-446655440000".to_string()),
                }),
                intr_bk_sttlm_amt: Some(ActiveCurrencyAndAmount {
                    value: Some(dec!(1500.00)),
                    ccy: Some("USD".to_string()),
                }),
                chrg_br: Some(ChargeBearerType::Shar),
                dbtr: Some(PartyIdentification {
                    nm: Some("Acme Industrial Supplies Ltd".to_string()),
                    pstl_adr: Some(PostalAddress {
                        strt_nm: Some("1 Exchange Square".to_string()),
                        twn_nm: Some("London".to_string()),
                        ctry: Some("GB".to_string()),
                        adr_line: vec![],
                    }),
                }),
                dbtr_agt: Some(agent("ABCDGB2LXXX")),
                cdtr_agt: Some(agent("EFGHUS33")),
                cdtr: Some(PartyIdentification {
                    nm: Some("Pacific Components Inc".to_string()),
                    pstl_adr: Some(PostalAddress {
                        strt_nm: Some("200 Harbor Blvd".to_string()),
                        twn_nm: Some("San Francisco".to_string()),
                        ctry: Some("US".to_string()),
                        adr_line: vec![],
                    }),
                }),
                rmt_inf: Some(RemittanceInformation {
                    ustrd: vec!["Invoice 2024-0042".to_string()],
                }),
            }],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descriptor_tables_cover_every_field() {
        assert_eq!(PAYMENT_IDENTIFICATION.fields.len(), 4);
        assert_eq!(GROUP_HEADER.fields.len(), 6);
        assert_eq!(CREDIT_TRANSFER_TRANSACTION.fields.len(), 8);
        let pmt = PaymentIdentification::default();
        for index in 0..pmt.descriptor().fields.len() {
            // every declared index resolves to a view
            let _ = pmt.field(index);
        }
    }

    #[test]
    fn field_lookup_by_name() {
        let (index, fd) = PAYMENT_IDENTIFICATION
            .field("uetr")
            .expect("uetr is declared");
        assert_eq!(index, 3);
        assert_eq!(fd.xml_name, Some("UETR"));
        assert!(PAYMENT_IDENTIFICATION.field("no_such_field").is_none());
    }

    #[test]
    fn code_sets_expose_their_members() {
        assert_eq!(SettlementMethod::Clrg.code(), "CLRG");
        assert!(SETTLEMENT_METHOD.contains("INDA"));
        assert!(!CHARGE_BEARER_TYPE.contains("INDA"));
    }

    #[test]
    fn sample_document_is_fully_populated() {
        let doc = sample_document();
        let cdt = doc.fi_to_fi_cstmr_cdt_trf.expect("credit transfer present");
        assert_eq!(cdt.cdt_trf_tx_inf.len(), 1);
        assert!(cdt.grp_hdr.expect("group header").sttlm_inf.is_some());
    }
}
