//! Tag vocabulary of the outage feed
//!
//! Dispatch happens on an enumerated tag type instead of string comparison
//! chains, so an unhandled element is a visible match arm rather than a
//! silent fall-through.

/// Local element names the parser reacts to
///
/// Everything outside the fixed vocabulary maps to [`OutageTag::Other`] and
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutageTag {
    Outage,
    IpAddress,
    ServiceName,
    IfLostService,
    IfRegainedService,
    Description,
    Host,
    LogMessage,
    Uei,
    NodeId,
    ServiceLostEvent,
    Other,
}

impl OutageTag {
    /// Classify an element name, ignoring any namespace prefix
    pub fn from_name(name: &str) -> Self {
        match local_name(name) {
            "outage" => Self::Outage,
            "ipAddress" => Self::IpAddress,
            // the REST feed nests the service name under `name`; some feed
            // variants spell the field out
            "name" | "serviceName" => Self::ServiceName,
            "ifLostService" => Self::IfLostService,
            "ifRegainedService" => Self::IfRegainedService,
            "description" => Self::Description,
            "host" => Self::Host,
            "logMessage" => Self::LogMessage,
            "uei" => Self::Uei,
            "nodeId" => Self::NodeId,
            "serviceLostEvent" => Self::ServiceLostEvent,
            _ => Self::Other,
        }
    }
}

fn local_name(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}
