//! Bus interface for the MPU-6050
//!
//! The driver talks to the device only through [`BusTransport`], so it can run
//! on any bus implementation (or a test double). [`I2cInterface`] adapts any
//! `embedded-hal` 1.0 I2C bus to that trait.

/// Addressed register access on a two-wire bus
///
/// Implementations perform exactly one bus transaction per call. Neither call
/// retries; errors are returned to the driver unchanged.
pub trait BusTransport {
    /// Transport error type
    type Error;

    /// Write a single byte to `register` of the device at `address`
    ///
    /// # Errors
    ///
    /// Returns the transport error if the transaction fails.
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Read `buf.len()` consecutive bytes starting at `register` of the device
    /// at `address`
    ///
    /// Returns the number of bytes actually transferred into `buf`. The driver
    /// rejects any count other than `buf.len()`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the transaction fails.
    fn read_block(&mut self, address: u8, register: u8, buf: &mut [u8])
    -> Result<usize, Self::Error>;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        T::write_register(self, address, register, value)
    }

    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        T::read_block(self, address, register, buf)
    }
}

/// I2C interface for the MPU-6050
///
/// Wraps an `embedded_hal::i2c::I2c` bus. The device address is supplied by
/// the driver on every call, so one interface type serves both AD0 settings.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::new(i2c);
    /// let mut imu = Mpu6050Driver::new(interface, I2C_ADDRESS_AD0_LOW)?;
    /// ```
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> BusTransport for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }

    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        // write_read either fills the whole buffer or fails
        self.i2c.write_read(address, &[register], buf)?;
        Ok(buf.len())
    }
}
