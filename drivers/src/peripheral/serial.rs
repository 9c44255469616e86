//! Serial link helpers.

use crate::error::{Error, Result};
use std::io::{ErrorKind, Read, Write};

/// A bidirectional byte stream to a board.
pub trait SerialLink: Read + Write + Send {}

impl<T: Read + Write + Send + ?Sized> SerialLink for T {}

/// Read one newline-terminated line, without the terminator.
///
/// # Errors
///
/// `Communication` if the link times out or closes before a full line
/// arrives, or the line is not UTF-8.
pub fn read_line<L: SerialLink + ?Sized>(link: &mut L) -> Result<String> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match link.read(&mut byte) {
            Ok(0) => {
                return Err(Error::Communication(
                    "Serial link closed while reading a line".into(),
                ));
            }
            Ok(_) if byte[0] == b'\n' => break,
            Ok(_) => line.push(byte[0]),
            Err(e) if e.kind() == ErrorKind::TimedOut => {
                return Err(Error::Communication(format!(
                    "Timed out waiting for a line, got {:?} so far",
                    String::from_utf8_lossy(&line)
                )));
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    let line = String::from_utf8(line)
        .map_err(|e| Error::Communication(format!("Serial reply is not UTF-8: {e}")))?;
    Ok(line.trim_end_matches('\r').to_owned())
}

/// Write a whole command and flush it.
pub fn write_all<L: SerialLink + ?Sized>(link: &mut L, data: &[u8]) -> Result<()> {
    link.write_all(data)?;
    link.flush()?;
    Ok(())
}

#[cfg(feature = "serial")]
pub use port::{find_usb_serial_ports, open_serial};

#[cfg(feature = "serial")]
mod port {
    use crate::error::Result;
    use serialport::{DataBits, FlowControl, Parity, SerialPort, SerialPortType, StopBits};
    use std::time::Duration;

    /// Open a serial port as 8N1 with no flow control.
    pub fn open_serial(path: &str, baud_rate: u32, timeout: Duration) -> Result<Box<dyn SerialPort>> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(timeout)
            .open()?;

        log::info!("Opened serial port: {} at {} baud", path, baud_rate);
        Ok(port)
    }

    /// List USB serial ports with the given IDs as `(path, serial number)`.
    ///
    /// Ports without a serial number are skipped.
    pub fn find_usb_serial_ports(vendor_id: u16, product_id: u16) -> Result<Vec<(String, String)>> {
        let ports = serialport::available_ports()?
            .into_iter()
            .filter_map(|port| match port.port_type {
                SerialPortType::UsbPort(info) if info.vid == vendor_id && info.pid == product_id => {
                    match info.serial_number {
                        Some(serial) => Some((port.port_name, serial)),
                        None => {
                            log::warn!("Skipping {}: no serial number", port.port_name);
                            None
                        }
                    }
                }
                _ => None,
            })
            .collect();
        Ok(ports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reads from a script, records writes.
    struct ScriptedLink {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl Read for ScriptedLink {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for ScriptedLink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn link(input: &[u8]) -> ScriptedLink {
        ScriptedLink {
            input: Cursor::new(input.to_vec()),
            output: Vec::new(),
        }
    }

    #[test]
    fn reads_lines_without_terminators() {
        let mut link = link(b"MCV4B:3\r\nnext\n");
        assert_eq!(read_line(&mut link).unwrap(), "MCV4B:3");
        assert_eq!(read_line(&mut link).unwrap(), "next");
    }

    #[test]
    fn closed_link_is_a_communication_error() {
        let mut link = link(b"partial");
        assert!(matches!(read_line(&mut link), Err(Error::Communication(_))));
    }

    #[test]
    fn write_all_sends_every_byte() {
        let mut link = link(b"");
        write_all(&mut link, &[2, 128]).unwrap();
        assert_eq!(link.output, vec![2, 128]);
    }
}
