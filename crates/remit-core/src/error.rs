//! Error types for the remit-core library.

use thiserror::Error;

/// Main error type for the remit library.
#[derive(Error, Debug)]
pub enum RemitError {
    /// A field failed validation.
    #[error("validation error: {0}")]
    Field(#[from] FieldError),

    /// Remark assembly or validation failed.
    #[error("remark error: {0}")]
    Remark(#[from] RemarkError),

    /// Instruction file export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Failures produced by the field validators.
///
/// Validators are total: every failure is a user-correctable input state
/// carried in this enum, never a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty.
    #[error("field must not be empty")]
    Empty,

    /// The text contains characters outside the permitted set.
    #[error("only letters, digits and / - ? : ( ) . , ' + are allowed")]
    InvalidCharacters,

    /// The text starts or ends with whitespace.
    #[error("remove leading or trailing spaces")]
    LeadingOrTrailingSpace,

    /// Two or more consecutive spaces.
    #[error("remove consecutive spaces")]
    DoubleSpace,

    /// The text exceeds the field's length limit.
    #[error("must not exceed {max} characters")]
    TooLong { max: usize },

    /// The two-letter code embedded in the IBAN is not a known IBAN country.
    #[error("unknown IBAN country code: {code}")]
    UnknownIbanCountry { code: String },

    /// The IBAN length does not match its country's required length.
    #[error("IBAN must be {expected} characters for this country, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// The MOD-97 checksum does not verify.
    #[error("IBAN checksum is invalid")]
    InvalidChecksum,

    /// A generic account number outside the accepted length range.
    #[error("account number must be {min} to {max} characters")]
    InvalidLength { min: usize, max: usize },

    /// A BIC that is neither 8 nor 11 characters.
    #[error("BIC must be 8 or 11 characters")]
    BicLength,

    /// A BIC that does not match the SWIFT structure.
    #[error("BIC format is invalid")]
    BicFormat,

    /// The country embedded in the BIC differs from the selected country.
    #[error("BIC country {bic_country} does not match selected country {selected}")]
    CountryMismatch { bic_country: String, selected: String },

    /// Zero or negative amount.
    #[error("amount must be positive")]
    MustBePositive,

    /// More decimal places than the currency allows.
    #[error("amount allows at most {max} decimal places")]
    TooManyDecimals { max: u32 },
}

/// Failures produced by the remark assembler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemarkError {
    /// No document line has both a number and a date.
    #[error("add at least one document with a number and a date")]
    MissingDocument,

    /// The assembled remark exceeds the rail's length ceiling.
    #[error("remark exceeds {max} characters")]
    TooLong { max: usize },

    /// A manually entered remark failed text validation.
    #[error(transparent)]
    Text(#[from] FieldError),
}

/// Errors related to instruction file generation.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to write a CSV record.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered output was not valid UTF-8.
    #[error("instruction output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for the remit library.
pub type Result<T> = std::result::Result<T, RemitError>;
