//! Human-editable string surface shared with outside writers.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use mouseaccel_errors::ParamError;
use parking_lot::Mutex;

use crate::mode::AccelerationMode;
use crate::parse::FloatParser;
use crate::types::{ParamName, ParameterSet};

/// Surface key for the acceleration mode.
pub const MODE_KEY: &str = "AccelerationMode";

/// Surface key for the reload trigger.
pub const UPDATE_KEY: &str = "update";

/// External, string-typed view of the tunables.
///
/// Writers (a control file, a CLI, a test) edit values here and raise the
/// reload flag. Nothing on the surface is visible to the engine until its
/// reload controller accepts the request. The surface is `Sync` and meant to
/// be shared through an `Arc`.
///
/// # Example
///
/// ```
/// use mouseaccel_params::{ParamName, TunableSurface};
///
/// let surface = TunableSurface::new();
/// surface.set_by_key("Acceleration", "0.08")?;
/// surface.set_by_key("AccelerationMode", "2")?;
/// surface.set_by_key("update", "1")?;
///
/// assert_eq!(surface.get(ParamName::Acceleration), "0.08");
/// assert_eq!(surface.mode_code(), 2);
/// assert!(surface.reload_requested());
/// # Ok::<(), mouseaccel_errors::ParamError>(())
/// ```
#[derive(Debug)]
pub struct TunableSurface {
    values: Mutex<[String; ParamName::COUNT]>,
    mode: AtomicU8,
    reload_requested: AtomicBool,
}

impl Default for TunableSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TunableSurface {
    /// Surface seeded with the compiled-in defaults.
    pub fn new() -> Self {
        Self::from_params(&ParameterSet::default())
    }

    /// Surface seeded with the given set; no reload is pending.
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            values: Mutex::new(ParamName::ALL.map(|name| params.get(name).to_string())),
            mode: AtomicU8::new(params.mode.code()),
            reload_requested: AtomicBool::new(false),
        }
    }

    /// Replace the raw string for a tunable.
    pub fn set(&self, name: ParamName, value: impl Into<String>) {
        let mut values = self.values.lock();
        if let Some(slot) = values.get_mut(name.index()) {
            *slot = value.into();
        }
    }

    /// Current raw string for a tunable.
    pub fn get(&self, name: ParamName) -> String {
        let values = self.values.lock();
        values
            .get(name.index())
            .cloned()
            .unwrap_or_default()
    }

    /// Set the acceleration mode code. Unknown codes mean pass-through.
    pub fn set_mode(&self, code: u8) {
        self.mode.store(code, Ordering::Relaxed);
    }

    /// Current acceleration mode code.
    pub fn mode_code(&self) -> u8 {
        self.mode.load(Ordering::Relaxed)
    }

    /// Ask the engine to re-read the surface.
    pub fn request_reload(&self) {
        self.reload_requested.store(true, Ordering::Release);
    }

    /// Whether a reload is pending.
    pub fn reload_requested(&self) -> bool {
        self.reload_requested.load(Ordering::Acquire)
    }

    /// Write a value using its surface key.
    ///
    /// Accepts every float tunable key, `AccelerationMode` (an integer code)
    /// and `update` (any non-zero integer raises the reload flag). Float
    /// values are stored verbatim; they are parsed only on reload.
    ///
    /// # Errors
    ///
    /// [`ParamError::UnknownParameter`] for an unrecognized key, or
    /// [`ParamError::Unparsable`] when `AccelerationMode` or `update` is not
    /// an integer in `0..=255`.
    pub fn set_by_key(&self, key: &str, value: &str) -> Result<(), ParamError> {
        if let Some(name) = ParamName::from_key(key) {
            self.set(name, value);
            return Ok(());
        }
        match key {
            MODE_KEY => {
                let code = parse_byte(MODE_KEY, value)?;
                self.set_mode(code);
                Ok(())
            }
            UPDATE_KEY => {
                if parse_byte(UPDATE_KEY, value)? != 0 {
                    self.request_reload();
                }
                Ok(())
            }
            _ => Err(ParamError::UnknownParameter(key.to_string())),
        }
    }

    /// Read a value using its surface key.
    ///
    /// # Errors
    ///
    /// [`ParamError::UnknownParameter`] for an unrecognized key.
    pub fn get_by_key(&self, key: &str) -> Result<String, ParamError> {
        if let Some(name) = ParamName::from_key(key) {
            return Ok(self.get(name));
        }
        match key {
            MODE_KEY => Ok(self.mode_code().to_string()),
            UPDATE_KEY => Ok(u8::from(self.reload_requested()).to_string()),
            _ => Err(ParamError::UnknownParameter(key.to_string())),
        }
    }

    /// Every key with its current raw value, mode last.
    pub fn snapshot_strings(&self) -> Vec<(&'static str, String)> {
        let values = self.values.lock();
        let mut out: Vec<(&'static str, String)> = ParamName::ALL
            .iter()
            .zip(values.iter())
            .map(|(name, raw)| (name.key(), raw.clone()))
            .collect();
        out.push((MODE_KEY, self.mode_code().to_string()));
        out
    }

    /// Clear the reload flag, returning whether it was set.
    pub(crate) fn take_reload_request(&self) -> bool {
        self.reload_requested.swap(false, Ordering::AcqRel)
    }

    /// Parse the surface into a copy of `base` without blocking.
    ///
    /// Returns `None` if a writer currently holds the surface. Fields whose
    /// string does not parse keep their value from `base` and are marked in
    /// the returned mask, indexed by [`ParamName::index`]. Does not allocate
    /// or log.
    pub(crate) fn try_parse_onto<P: FloatParser>(
        &self,
        parser: &P,
        base: &ParameterSet,
    ) -> Option<(ParameterSet, [bool; ParamName::COUNT])> {
        let values = self.values.try_lock()?;
        let mut next = *base;
        let mut rejected = [false; ParamName::COUNT];
        for ((name, raw), miss) in ParamName::ALL
            .iter()
            .zip(values.iter())
            .zip(rejected.iter_mut())
        {
            match parser.parse(raw) {
                Some(value) => next.set(*name, value),
                None => *miss = true,
            }
        }
        next.mode = AccelerationMode::from_code(self.mode_code());
        Some((next, rejected))
    }

    /// Hold the string lock, for exercising the contended path.
    #[cfg(test)]
    pub(crate) fn lock_values(&self) -> parking_lot::MutexGuard<'_, [String; ParamName::COUNT]> {
        self.values.lock()
    }
}

fn parse_byte(key: &'static str, value: &str) -> Result<u8, ParamError> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|_err| ParamError::unparsable(key, value))
}
