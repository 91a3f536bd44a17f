//! Line format shared by the reader and the writer

use core_kernel::{Amount, RecordId};
use domain_billing::{Invoice, Payment};

/// Terminator written after every output line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Terminator written after every output line
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A record stored as one `<id>,<amount>` line
pub trait RecordLine: Sized {
    /// Builds the record from its parsed fields
    fn from_fields(id: RecordId, amount: Amount) -> Self;

    /// Returns the fields to write
    fn fields(&self) -> (RecordId, Amount);
}

impl RecordLine for Invoice {
    fn from_fields(id: RecordId, amount: Amount) -> Self {
        Invoice::new(id, amount)
    }

    fn fields(&self) -> (RecordId, Amount) {
        (self.id, self.amount)
    }
}

impl RecordLine for Payment {
    fn from_fields(id: RecordId, amount: Amount) -> Self {
        Payment::new(id, amount)
    }

    fn fields(&self) -> (RecordId, Amount) {
        (self.id, self.amount)
    }
}

/// Parses `<id>,<amount>`, returning a description of the problem on failure
pub fn parse_line(line: &str) -> Result<(RecordId, Amount), String> {
    let (id, amount) = line
        .split_once(',')
        .ok_or_else(|| "expected two comma-separated fields".to_string())?;
    if amount.contains(',') {
        return Err("expected exactly two fields".to_string());
    }

    let id = id.parse::<RecordId>().map_err(|e| e.to_string())?;
    let amount = amount.parse::<Amount>().map_err(|e| e.to_string())?;
    Ok((id, amount))
}

/// Formats a record as `<id>,<amount>` without terminator
pub fn format_line<T: RecordLine>(record: &T) -> String {
    let (id, amount) = record.fields();
    format!("{},{}", id, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let (id, amount) = parse_line("12,3400").unwrap();
        assert_eq!(id, RecordId::new(12));
        assert_eq!(amount, Amount::from_minor(3400));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(parse_line("12").is_err());
        assert!(parse_line("12,34,56").is_err());
        assert!(parse_line("12, 34").is_err());
        assert!(parse_line(",34").is_err());
        assert!(parse_line("a,34").is_err());
        assert!(parse_line("12,-34").is_err());
    }

    #[test]
    fn test_format_line() {
        let invoice = Invoice::new(RecordId::new(3), Amount::from_minor(50));
        assert_eq!(format_line(&invoice), "3,50");
    }
}
