//! USB control transfer transport.

use crate::error::Result;

/// A link carrying vendor control requests to one device.
///
/// `value` selects the command; `index` carries a small argument.
pub trait ControlTransport: Send {
    /// Issue a device-to-host request and return the reply.
    fn read(&mut self, value: u16, length: usize) -> Result<Vec<u8>>;

    /// Issue a host-to-device request.
    fn write(&mut self, value: u16, index: u16, data: &[u8]) -> Result<()>;
}

impl<T: ControlTransport + ?Sized> ControlTransport for Box<T> {
    fn read(&mut self, value: u16, length: usize) -> Result<Vec<u8>> {
        (**self).read(value, length)
    }

    fn write(&mut self, value: u16, index: u16, data: &[u8]) -> Result<()> {
        (**self).write(value, index, data)
    }
}

#[cfg(feature = "usb")]
pub use usb::{UsbControlTransport, find_usb_devices};

#[cfg(feature = "usb")]
mod usb {
    use super::ControlTransport;
    use crate::error::{Error, Result};
    use rusb::{DeviceHandle, Direction, GlobalContext, Recipient, RequestType, UsbContext};
    use std::time::Duration;

    /// Vendor control requests over libusb.
    pub struct UsbControlTransport {
        handle: DeviceHandle<GlobalContext>,
        request: u8,
        timeout: Duration,
    }

    impl UsbControlTransport {
        pub fn new(handle: DeviceHandle<GlobalContext>, request: u8, timeout: Duration) -> Self {
            Self {
                handle,
                request,
                timeout,
            }
        }
    }

    impl ControlTransport for UsbControlTransport {
        fn read(&mut self, value: u16, length: usize) -> Result<Vec<u8>> {
            let request_type = rusb::request_type(Direction::In, RequestType::Vendor, Recipient::Device);
            let mut buffer = vec![0u8; length];
            let read = self.handle.read_control(
                request_type,
                self.request,
                value,
                0,
                &mut buffer,
                self.timeout,
            )?;
            if read != length {
                return Err(Error::Communication(format!(
                    "Expected {length} bytes for request {value}, got {read}"
                )));
            }
            Ok(buffer)
        }

        fn write(&mut self, value: u16, index: u16, data: &[u8]) -> Result<()> {
            let request_type = rusb::request_type(Direction::Out, RequestType::Vendor, Recipient::Device);
            self.handle.write_control(
                request_type,
                self.request,
                value,
                index,
                data,
                self.timeout,
            )?;
            Ok(())
        }
    }

    /// Open every attached device with the given IDs.
    ///
    /// Returns `(serial number, transport)` pairs. Devices that cannot be
    /// opened are skipped with a warning.
    pub fn find_usb_devices(
        vendor_id: u16,
        product_id: u16,
        request: u8,
        timeout: Duration,
    ) -> Result<Vec<(String, UsbControlTransport)>> {
        let mut found = Vec::new();
        for device in GlobalContext::default().devices()?.iter() {
            let descriptor = device.device_descriptor()?;
            if descriptor.vendor_id() != vendor_id || descriptor.product_id() != product_id {
                continue;
            }

            let handle = match device.open() {
                Ok(handle) => handle,
                Err(e) => {
                    log::warn!(
                        "Unable to open USB device {:04x}:{:04x} on bus {} address {}: {}",
                        vendor_id,
                        product_id,
                        device.bus_number(),
                        device.address(),
                        e
                    );
                    continue;
                }
            };
            let serial = handle.read_serial_number_string_ascii(&descriptor)?;
            log::debug!("Found USB device {:04x}:{:04x} serial {}", vendor_id, product_id, serial);
            found.push((serial, UsbControlTransport::new(handle, request, timeout)));
        }
        Ok(found)
    }
}
