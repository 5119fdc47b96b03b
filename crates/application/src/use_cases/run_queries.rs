use crate::ports::{PacketAssembler, PacketTransport};
use crate::services::random_label;
use dnsforge_domain::{
    AttemptOutcome, DnsQuery, DomainError, Endpoint, RunPlan, RunReport,
};
use fastrand::Rng;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the encode → assemble → transmit pipeline `plan.attempts` times.
///
/// Each attempt is independent: a failure is logged, recorded in the report
/// and still consumes the attempt.
pub struct RunQueriesUseCase {
    assembler: Arc<dyn PacketAssembler>,
    transport: Arc<dyn PacketTransport>,
}

impl RunQueriesUseCase {
    pub fn new(assembler: Arc<dyn PacketAssembler>, transport: Arc<dyn PacketTransport>) -> Self {
        Self {
            assembler,
            transport,
        }
    }

    pub async fn execute(
        &self,
        plan: &RunPlan,
        targets: &[Ipv4Addr],
        rng: &mut Rng,
    ) -> Result<RunReport, DomainError> {
        if targets.is_empty() {
            return Err(DomainError::Configuration(
                "No targets available".to_string(),
            ));
        }

        info!(
            source = %plan.source,
            attempts = plan.attempts,
            targets = targets.len(),
            "Starting run"
        );

        let mut report = RunReport::default();

        for attempt in 0..plan.attempts {
            let outcome = match self.attempt(plan, targets, rng).await {
                Ok((destination, bytes)) => {
                    info!(attempt, destination = %destination, bytes, "Packet sent");
                    AttemptOutcome::Sent {
                        attempt,
                        destination,
                        bytes,
                    }
                }
                Err(error) => {
                    warn!(attempt, error = %error, "Attempt failed");
                    AttemptOutcome::Failed { attempt, error }
                }
            };
            report.record(outcome);

            if attempt + 1 < plan.attempts && !plan.delay.is_zero() {
                tokio::time::sleep(plan.delay).await;
            }
        }

        info!(
            attempts = report.attempts(),
            sent = report.sent(),
            failed = report.failed(),
            "Run complete"
        );

        Ok(report)
    }

    async fn attempt(
        &self,
        plan: &RunPlan,
        targets: &[Ipv4Addr],
        rng: &mut Rng,
    ) -> Result<(Ipv4Addr, usize), DomainError> {
        let label = random_label(rng, plan.label_length);
        let hostname = format!("{}.{}", label, plan.base_domain);
        let query = DnsQuery::new(hostname, rng.u16(..))
            .with_recursion_desired(plan.recursion_desired);

        let destination = targets[rng.usize(..targets.len())];

        let packet = self.assembler.assemble(
            &query,
            plan.source,
            Endpoint::new(destination, plan.destination_port),
            plan.ip_identification,
        )?;

        debug!(
            hostname = %query.hostname,
            id = query.id,
            dns_len = packet.dns_len(),
            len = packet.len(),
            "Packet assembled"
        );

        let bytes = self.transport.send(&packet, destination).await?;
        Ok((destination, bytes))
    }
}
