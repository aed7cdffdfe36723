//! Fixed-column CSV instruction file.

use std::io::Write;

use tracing::debug;

use crate::error::ExportError;
use crate::models::order::PaymentOrder;

use super::chunk_padded;

/// Column headers, parsed positionally by the receiving side.
pub const CSV_HEADERS: [&str; 16] = [
    "Debit Account No.",
    "Destination Acc No.",
    "Remittance Currency",
    "Transfer Amount",
    "Beneficiary Name",
    "Beneficiary Addr1",
    "Beneficiary Addr2",
    "Beneficiary Addr3",
    "Bank Code (SWIFT)",
    "Bank Name",
    "Country",
    "Remark",
    "rem_info1",
    "rem_info2",
    "rem_info3",
    "rem_info4",
];

const ADDR_CHUNK: usize = 35;
const REMARK_CHUNK: usize = 30;
const REMARK_CHUNKS: usize = 4;

/// Write orders as a CSV instruction file.
pub fn write_csv<W: Write>(orders: &[PaymentOrder], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;

    for order in orders {
        wtr.write_record(order_record(order))?;
    }

    wtr.flush()?;
    debug!("wrote {} orders to CSV", orders.len());
    Ok(())
}

/// Render the CSV instruction file to a string.
pub fn csv_string(orders: &[PaymentOrder]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(orders, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// One CSV row for an order.
fn order_record(order: &PaymentOrder) -> Vec<String> {
    let addr = chunk_padded(&order.beneficiary.address, ADDR_CHUNK, 3);
    let rem_info = chunk_padded(&order.remark, REMARK_CHUNK, REMARK_CHUNKS);

    let mut record = vec![
        order.debit_account.clone(),
        order.destination_account.clone(),
        order.currency.clone(),
        order.amount.to_string(),
        order.beneficiary.name.clone(),
    ];
    record.extend(addr);
    record.extend([
        order.bank.bic.clone(),
        order.bank.name.clone(),
        order.beneficiary.country.clone(),
        order.remark.clone(),
    ]);
    record.extend(rem_info);
    record
}
