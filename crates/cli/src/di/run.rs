use dnsforge_application::ports::{PacketAssembler, PacketTransport, TargetSource};
use dnsforge_application::use_cases::RunQueriesUseCase;
use dnsforge_domain::Config;
use dnsforge_infrastructure::targets::AddressListLoader;
use dnsforge_infrastructure::transport::RawSocketTransport;
use dnsforge_infrastructure::wire::Ipv4UdpAssembler;
use std::sync::Arc;

pub struct RunServices {
    pub targets: Arc<dyn TargetSource>,
    pub run_queries: Arc<RunQueriesUseCase>,
}

impl RunServices {
    pub fn new(config: &Config) -> Self {
        let assembler: Arc<dyn PacketAssembler> = Arc::new(Ipv4UdpAssembler::new());
        let transport: Arc<dyn PacketTransport> = Arc::new(RawSocketTransport::new());

        Self {
            targets: Arc::new(AddressListLoader::new(config.run.targets_file.clone())),
            run_queries: Arc::new(RunQueriesUseCase::new(assembler, transport)),
        }
    }
}
