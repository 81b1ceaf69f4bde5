pub mod list;
pub mod record;
pub mod report;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One line of the donation report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub total: f64,
    pub count: usize,
    pub average: f64,
}

/// Confirmation of a committed donation.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub donors: Vec<String>,
    pub report: Vec<ReportRow>,
    pub receipt: Option<Receipt>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_donors(mut self, donors: Vec<String>) -> Self {
        self.donors = donors;
        self
    }

    pub fn with_report(mut self, rows: Vec<ReportRow>) -> Self {
        self.report = rows;
        self
    }

    pub fn with_receipt(mut self, receipt: Receipt) -> Self {
        self.receipt = Some(receipt);
        self
    }
}
