//! 73-field semicolon-delimited bank upload format.

use std::io::Write;

use tracing::debug;

use crate::error::ExportError;
use crate::models::order::PaymentOrder;

use super::chunk_padded;

/// Total field count per instruction line.
pub const TXT_FIELD_COUNT: usize = 73;

const ADDR_CHUNK: usize = 35;

/// Render one order as a single instruction line.
///
/// Positions 1-15 carry the order attributes; the remaining fields stay
/// blank for the bank's reserved columns. Every line ends with a trailing
/// semicolon.
pub fn instruction_line(order: &PaymentOrder) -> String {
    let mut fields = vec![String::new(); TXT_FIELD_COUNT];
    let addr = chunk_padded(&order.beneficiary.address, ADDR_CHUNK, 3);

    fields[0] = order.debit_account.clone();
    fields[1] = order.destination_account.clone();
    fields[2] = order.currency.clone();
    fields[3] = order.amount.to_string();
    fields[4] = order.beneficiary.name.clone();
    fields[5] = addr[0].clone();
    fields[6] = addr[1].clone();
    fields[7] = addr[2].clone();
    fields[8] = order.bank.bic.clone();
    fields[9] = order.bank.name.clone();
    fields[10] = order.beneficiary.country.clone();
    fields[11] = order.remark.clone();
    fields[12] = order.reference.clone().unwrap_or_default();
    fields[13] = order.order_number.clone();
    fields[14] = order.client_id.clone();

    let mut line = fields.join(";");
    line.push(';');
    line
}

/// Write orders as a bank upload TXT file, one instruction line per order.
pub fn write_txt<W: Write>(orders: &[PaymentOrder], mut writer: W) -> Result<(), ExportError> {
    for order in orders {
        writeln!(writer, "{}", instruction_line(order))?;
    }
    debug!("wrote {} orders to TXT", orders.len());
    Ok(())
}
