//! validation - structural checks that the configuration types don't enforce themselves
//!
//! Every check has a configurable severity so that a deployment can choose between
//! rejecting, warning about, or ignoring each kind of problem.  Checks never stop at
//! the first problem; a report carries everything found.

use crate::data::*;
use derive_deref::Deref;
use ipnetwork::IpNetwork;
use models::{Snssai, UriScheme};
use serde::Deserialize;
use std::collections::HashSet;
use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ignore,
    Warn,
    Reject,
}

/// Severity of each check.  Deserialized from a TOML file where every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ValidationPolicy {
    pub version_mismatch: Severity,
    pub missing_sbi: Severity,
    pub missing_pfcp: Severity,
    pub https_without_tls: Severity,
    pub dangling_link: Severity,
    pub duplicate_snssai: Severity,
    pub invalid_ue_subnet: Severity,
    pub invalid_dns_address: Severity,
    pub an_without_ip: Severity,
    pub unknown_upf_in_path: Severity,
    pub unlinked_path_hop: Severity,
    pub empty_pfd: Severity,
    pub empty_forwarding_policy: Severity,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy {
            version_mismatch: Severity::Reject,
            missing_sbi: Severity::Warn,
            missing_pfcp: Severity::Warn,
            https_without_tls: Severity::Warn,
            dangling_link: Severity::Reject,
            duplicate_snssai: Severity::Warn,
            invalid_ue_subnet: Severity::Reject,
            invalid_dns_address: Severity::Warn,
            an_without_ip: Severity::Warn,
            unknown_upf_in_path: Severity::Reject,
            unlinked_path_hop: Severity::Ignore,
            empty_pfd: Severity::Warn,
            empty_forwarding_policy: Severity::Warn,
        }
    }
}

impl ValidationPolicy {
    /// Every check set to the same severity.
    pub fn uniform(severity: Severity) -> Self {
        ValidationPolicy {
            version_mismatch: severity,
            missing_sbi: severity,
            missing_pfcp: severity,
            https_without_tls: severity,
            dangling_link: severity,
            duplicate_snssai: severity,
            invalid_ue_subnet: severity,
            invalid_dns_address: severity,
            an_without_ip: severity,
            unknown_upf_in_path: severity,
            unlinked_path_hop: severity,
            empty_pfd: severity,
            empty_forwarding_policy: severity,
        }
    }
}

/// Schema versions that the loaded documents must declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedVersions {
    pub config: String,
    pub routing: String,
}

impl Default for ExpectedVersions {
    fn default() -> Self {
        ExpectedVersions {
            config: SMF_EXPECTED_CONFIG_VERSION.to_string(),
            routing: UE_ROUTING_EXPECTED_CONFIG_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Config,
    Routing,
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Document::Config => write!(f, "SMF configuration"),
            Document::Routing => write!(f, "UE routing configuration"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{document} version is [{found}], but expected is [{expected}]")]
    VersionMismatch {
        document: Document,
        found: String,
        expected: String,
    },

    #[error("No sbi section")]
    MissingSbi,

    #[error("No pfcp section")]
    MissingPfcp,

    #[error("SBI scheme is https but there is no tls section")]
    HttpsWithoutTls,

    #[error("SBI scheme is https but tls pem or key is empty")]
    IncompleteTls,

    #[error("Link {index} endpoint {endpoint} is not in up_nodes")]
    DanglingLink { index: usize, endpoint: String },

    #[error("S-NSSAI {snssai} appears more than once in snssaiInfos")]
    DuplicateSnssai { snssai: Snssai },

    #[error("ueSubnet {subnet} of DNN {dnn} on S-NSSAI {snssai} is not a CIDR - {reason}")]
    InvalidUeSubnet {
        snssai: String,
        dnn: String,
        subnet: String,
        reason: String,
    },

    #[error("DNS address {address} of DNN {dnn} is not a valid IP address")]
    InvalidDnsAddress { dnn: String, address: String },

    #[error("AN node {node} has no an_ip")]
    AnWithoutIp { node: String },

    #[error("Path {path} of {supi} goes through {upf}, which is not in up_nodes")]
    UnknownUpfInPath {
        supi: String,
        path: usize,
        upf: String,
    },

    #[error("Path {path} of {supi} hops from {from} to {to} but there is no such link")]
    UnlinkedPathHop {
        supi: String,
        path: usize,
        from: String,
        to: String,
    },

    #[error("PFD {pfd_id} of application {app_id} has no flow description, URL or domain name")]
    EmptyPfd { app_id: String, pfd_id: String },

    #[error("Route profile {profile} has no forwardingPolicyID")]
    EmptyForwardingPolicy { profile: RouteProfId },
}

impl Violation {
    fn severity(&self, policy: &ValidationPolicy) -> Severity {
        match self {
            Violation::VersionMismatch { .. } => policy.version_mismatch,
            Violation::MissingSbi => policy.missing_sbi,
            Violation::MissingPfcp => policy.missing_pfcp,
            Violation::HttpsWithoutTls | Violation::IncompleteTls => policy.https_without_tls,
            Violation::DanglingLink { .. } => policy.dangling_link,
            Violation::DuplicateSnssai { .. } => policy.duplicate_snssai,
            Violation::InvalidUeSubnet { .. } => policy.invalid_ue_subnet,
            Violation::InvalidDnsAddress { .. } => policy.invalid_dns_address,
            Violation::AnWithoutIp { .. } => policy.an_without_ip,
            Violation::UnknownUpfInPath { .. } => policy.unknown_upf_in_path,
            Violation::UnlinkedPathHop { .. } => policy.unlinked_path_hop,
            Violation::EmptyPfd { .. } => policy.empty_pfd,
            Violation::EmptyForwardingPolicy { .. } => policy.empty_forwarding_policy,
        }
    }
}

/// Every violation that the policy rejects, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error, Deref)]
#[error("{} configuration problem(s):{}", .0.len(), list(.0))]
pub struct ValidationErrors(Vec<Violation>);

fn list(violations: &[Violation]) -> String {
    violations.iter().map(|v| format!("\n  - {v}")).collect()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: ValidationPolicy,
    expected: ExpectedVersions,
}

impl Validator {
    pub fn new(policy: ValidationPolicy, expected: ExpectedVersions) -> Self {
        Validator { policy, expected }
    }

    pub fn validate_config(&self, config: &Config) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_version(
            Document::Config,
            config.version(),
            &self.expected.config,
            &mut report,
        );
        if let Some(configuration) = &config.configuration {
            self.check_sbi(configuration, &mut report);
            if configuration.pfcp.is_none() {
                self.record(Violation::MissingPfcp, &mut report);
            }
            self.check_snssai_infos(&configuration.snssai_infos, &mut report);
            self.check_topology(&configuration.userplane_information, &mut report);
        }
        report
    }

    /// Check a routing document, including that its paths only use nodes of `topology`.
    pub fn validate_routing(
        &self,
        routing: &RoutingConfig,
        topology: &UserPlaneInformation,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_version(
            Document::Routing,
            routing.version(),
            &self.expected.routing,
            &mut report,
        );
        for ue in &routing.ue_routing_info {
            for (index, path) in ue.path_list.iter().enumerate() {
                self.check_path(&ue.supi, index, path, topology, &mut report);
            }
        }
        for app in &routing.pfd_datas {
            for pfd in app.pfds.iter().filter(|pfd| pfd.is_empty()) {
                self.record(
                    Violation::EmptyPfd {
                        app_id: app.app_id.clone(),
                        pfd_id: pfd.pfd_id.clone(),
                    },
                    &mut report,
                );
            }
        }
        for (id, profile) in &routing.route_prof {
            if profile.forwarding_policy_id.is_empty() {
                self.record(
                    Violation::EmptyForwardingPolicy {
                        profile: id.clone(),
                    },
                    &mut report,
                );
            }
        }
        report
    }

    fn record(&self, violation: Violation, report: &mut ValidationReport) {
        match violation.severity(&self.policy) {
            Severity::Ignore => {}
            Severity::Warn => report.warnings.push(violation),
            Severity::Reject => report.errors.push(violation),
        }
    }

    fn check_version(
        &self,
        document: Document,
        found: &str,
        expected: &str,
        report: &mut ValidationReport,
    ) {
        if found != expected {
            self.record(
                Violation::VersionMismatch {
                    document,
                    found: found.to_string(),
                    expected: expected.to_string(),
                },
                report,
            );
        }
    }

    fn check_sbi(&self, configuration: &Configuration, report: &mut ValidationReport) {
        let Some(sbi) = &configuration.sbi else {
            self.record(Violation::MissingSbi, report);
            return;
        };
        if sbi.scheme != UriScheme::Https {
            return;
        }
        match &sbi.tls {
            None => self.record(Violation::HttpsWithoutTls, report),
            Some(tls) if !tls.is_complete() => self.record(Violation::IncompleteTls, report),
            Some(_) => {}
        }
    }

    fn check_snssai_infos(&self, snssai_infos: &[SnssaiInfoItem], report: &mut ValidationReport) {
        let mut seen = HashSet::new();
        for item in snssai_infos {
            let snssai_name = match &item.s_nssai {
                Some(snssai) => {
                    // SD hex digits compare case-insensitively.
                    let key = (snssai.sst, snssai.sd.to_ascii_lowercase());
                    if !seen.insert(key) {
                        self.record(
                            Violation::DuplicateSnssai {
                                snssai: snssai.clone(),
                            },
                            report,
                        );
                    }
                    snssai.to_string()
                }
                None => "(none)".to_string(),
            };
            for dnn_info in &item.dnn_infos {
                self.check_dnn_info(&snssai_name, dnn_info, report);
            }
        }
    }

    fn check_dnn_info(
        &self,
        snssai_name: &str,
        dnn_info: &SnssaiDnnInfoItem,
        report: &mut ValidationReport,
    ) {
        // ipnetwork reads a bare address as a host route, but a subnet needs its prefix.
        let subnet_error = if dnn_info.ue_subnet.contains('/') {
            dnn_info.ue_subnet.parse::<IpNetwork>().err().map(|e| e.to_string())
        } else {
            Some("no prefix length".to_string())
        };
        if let Some(reason) = subnet_error {
            self.record(
                Violation::InvalidUeSubnet {
                    snssai: snssai_name.to_string(),
                    dnn: dnn_info.dnn.clone(),
                    subnet: dnn_info.ue_subnet.clone(),
                    reason,
                },
                report,
            );
        }
        let dns = &dnn_info.dns;
        let bad_ipv4 = !dns.ipv4.is_empty() && dns.ipv4.parse::<Ipv4Addr>().is_err();
        let bad_ipv6 = !dns.ipv6.is_empty() && dns.ipv6.parse::<Ipv6Addr>().is_err();
        for (bad, address) in [(bad_ipv4, &dns.ipv4), (bad_ipv6, &dns.ipv6)] {
            if bad {
                self.record(
                    Violation::InvalidDnsAddress {
                        dnn: dnn_info.dnn.clone(),
                        address: address.clone(),
                    },
                    report,
                );
            }
        }
    }

    fn check_topology(&self, topology: &UserPlaneInformation, report: &mut ValidationReport) {
        for (index, endpoint) in topology.dangling_links() {
            self.record(
                Violation::DanglingLink {
                    index,
                    endpoint: endpoint.to_string(),
                },
                report,
            );
        }
        for (name, node) in topology.nodes_of_type(UpNodeType::An) {
            if node.an_ip.is_empty() {
                self.record(
                    Violation::AnWithoutIp {
                        node: name.to_string(),
                    },
                    report,
                );
            }
        }
    }

    fn check_path(
        &self,
        supi: &str,
        index: usize,
        path: &Path,
        topology: &UserPlaneInformation,
        report: &mut ValidationReport,
    ) {
        for upf in topology.missing_nodes(&path.upf) {
            self.record(
                Violation::UnknownUpfInPath {
                    supi: supi.to_string(),
                    path: index,
                    upf: upf.to_string(),
                },
                report,
            );
        }
        for hop in path.upf.windows(2) {
            let (from, to) = (&hop[0], &hop[1]);
            // Hops to unknown nodes have already been reported.
            if topology.contains_node(from)
                && topology.contains_node(to)
                && !topology.are_linked(from, to)
            {
                self.record(
                    Violation::UnlinkedPathHop {
                        supi: supi.to_string(),
                        path: index,
                        from: from.clone(),
                        to: to.clone(),
                    },
                    report,
                );
            }
        }
    }
}
