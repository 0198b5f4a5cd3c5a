//! Kill-chain phases and the flavour text attached to them.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KillChainPhase {
    pub name: &'static str,
    /// Progress at which the phase begins
    pub threshold: f64,
    pub techniques: &'static [&'static str],
}

pub const KILL_CHAIN_PHASES: [KillChainPhase; 7] = [
    KillChainPhase {
        name: "Reconnaissance",
        threshold: 0.0,
        techniques: &[
            "T1595 Active Scanning",
            "T1592 Victim Host Info",
            "T1593 Search Open Websites",
            "T1589 Gather Identity Info",
        ],
    },
    KillChainPhase {
        name: "Resource Development",
        threshold: 14.0,
        techniques: &[
            "T1583 Acquire Infrastructure",
            "T1588 Obtain Capabilities",
            "T1587 Develop Capabilities",
            "T1584 Compromise Infrastructure",
        ],
    },
    KillChainPhase {
        name: "Initial Access",
        threshold: 28.0,
        techniques: &[
            "T1190 Exploit Public App",
            "T1566 Phishing",
            "T1133 External Remote Services",
            "T1078 Valid Accounts",
        ],
    },
    KillChainPhase {
        name: "Execution",
        threshold: 42.0,
        techniques: &[
            "T1059 Command Interpreter",
            "T1203 Client Execution",
            "T1053 Scheduled Task",
            "T1106 Native API",
        ],
    },
    KillChainPhase {
        name: "Persistence",
        threshold: 56.0,
        techniques: &[
            "T1547 Boot Autostart",
            "T1098 Account Manipulation",
            "T1543 Modify System Process",
            "T1136 Create Account",
        ],
    },
    KillChainPhase {
        name: "Privilege Escalation",
        threshold: 70.0,
        techniques: &[
            "T1068 Privilege Escalation",
            "T1548 Abuse Elevation Control",
            "T1055 Process Injection",
            "T1484 Domain Policy",
        ],
    },
    KillChainPhase {
        name: "Command & Control",
        threshold: 84.0,
        techniques: &[
            "T1071 App Layer Protocol",
            "T1573 Encrypted Channel",
            "T1008 Fallback Channels",
            "T1105 Ingress Tool Transfer",
        ],
    },
];

pub const FAILURE_REASONS: [&str; 10] = [
    "Connection Refused by Peer",
    "Handshake Timeout (SSL/TLS)",
    "Port 22 Filtered by Firewall",
    "IDS Signature Match Detected",
    "Decryption Key Mismatch",
    "Honeypot Triggered",
    "Buffer Overflow Prevented by DEP",
    "Packet Fragmentation Error",
    "Authentication Token Expired",
    "Reverse Shell Blocked",
];

/// Index of the last phase whose threshold is at or below `progress`.
/// Negative progress maps to the first phase.
pub fn phase_index_for(progress: f64) -> usize {
    KILL_CHAIN_PHASES
        .iter()
        .rposition(|p| progress >= p.threshold)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_index_boundaries() {
        assert_eq!(phase_index_for(-5.0), 0);
        assert_eq!(phase_index_for(0.0), 0);
        assert_eq!(phase_index_for(13.99), 0);
        assert_eq!(phase_index_for(14.0), 1);
        assert_eq!(phase_index_for(83.9), 5);
        assert_eq!(phase_index_for(84.0), 6);
        assert_eq!(phase_index_for(99.9), 6);
    }

    #[test]
    fn test_thresholds_strictly_increase() {
        for pair in KILL_CHAIN_PHASES.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }
}
