/// Power-state transitions recognised in the system log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventCode {
    Startup,
    Shutdown,
}

impl EventCode {
    pub const STARTUP_ID: u32 = 6005;
    pub const SHUTDOWN_ID: u32 = 6006;

    /// Build a code from a raw log identifier.
    ///
    /// Only the low 16 bits are meaningful: the source may set qualifier
    /// bits (severity, facility) in the high word.
    pub fn from_event_id(raw: u32) -> Option<Self> {
        match raw & 0xFFFF {
            Self::STARTUP_ID => Some(Self::Startup),
            Self::SHUTDOWN_ID => Some(Self::Shutdown),
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            EventCode::Startup => Self::STARTUP_ID,
            EventCode::Shutdown => Self::SHUTDOWN_ID,
        }
    }
}
