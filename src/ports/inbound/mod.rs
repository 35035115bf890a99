/// Inbound ports (Driving ports) - Use case interfaces
pub mod enforcement_port;

pub use enforcement_port::EnforcementPort;
