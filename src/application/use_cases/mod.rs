/// Use cases module containing application business logic orchestration
mod enforce_bytecode_level;

pub use enforce_bytecode_level::EnforceBytecodeLevelUseCase;
