// Encoder session configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Sampling rates the codec accepts
pub const SUPPORTED_SAMPLING_RATES: [u32; 5] = [8000, 12000, 16000, 24000, 48000];

/// Placeholder bitstream serial, `11 22 33 44` on the wire
pub const DEFAULT_SERIAL: u32 = 0x4433_2211;

/// Vendor string written into the comment header
pub const DEFAULT_VENDOR: &str = "opusogg";

/// Codec application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Application {
    /// Low-latency voice
    Voip = 2048,
    /// General audio
    Audio = 2049,
    /// Ultra low latency, restricted tool set
    RestrictedLowDelay = 2051,
}

impl TryFrom<i32> for Application {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            2048 => Ok(Application::Voip),
            2049 => Ok(Application::Audio),
            2051 => Ok(Application::RestrictedLowDelay),
            _ => Err(Error::InvalidConfig(format!("unknown application mode {}", code))),
        }
    }
}

/// Whether packets are wrapped in OGG pages or returned bare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    None = 0,
    Ogg = 1,
}

impl TryFrom<i32> for Framing {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Framing::None),
            1 => Ok(Framing::Ogg),
            _ => Err(Error::UnknownFraming(code)),
        }
    }
}

/// Encoder session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub sampling_rate: u32,
    pub channels: u8,
    pub application: Application,
    pub framing: Framing,
    /// Bitstream serial number stamped into every page
    pub serial: u32,
    /// Vendor string for the comment header
    pub vendor: String,
}

impl Default for EncoderConfig {
    /// 48 kHz stereo general audio in OGG pages
    fn default() -> Self {
        EncoderConfig {
            sampling_rate: 48000,
            channels: 2,
            application: Application::Audio,
            framing: Framing::Ogg,
            serial: DEFAULT_SERIAL,
            vendor: DEFAULT_VENDOR.to_string(),
        }
    }
}

impl EncoderConfig {
    /// Reject combinations the codec cannot be opened with
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_SAMPLING_RATES.contains(&self.sampling_rate) {
            return Err(Error::InvalidConfig(format!(
                "unsupported sampling rate {} Hz",
                self.sampling_rate
            )));
        }
        if self.channels != 1 && self.channels != 2 {
            return Err(Error::InvalidConfig(format!(
                "unsupported channel count {}",
                self.channels
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EncoderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Samples per channel in one 2.5 ms block, the smallest block the codec accepts
    pub fn min_block_size(&self) -> usize {
        self.sampling_rate as usize / 400
    }
}
