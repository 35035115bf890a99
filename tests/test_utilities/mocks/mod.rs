/// Mock implementations of the outbound ports
mod mock_graph_builder;
mod mock_logger;
mod mock_resolver;

pub use mock_graph_builder::MockGraphBuilder;
pub use mock_logger::MockLogger;
pub use mock_resolver::MockResolver;
