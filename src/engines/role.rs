//! The fixed set of engine roles.

use std::fmt;

/// A logical engine the tool depends on.
///
/// The set is closed: every role has a display label, a binary name and an
/// override variable, all resolved through exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineRole {
    /// Executes queries.
    QueryEngine,
    /// Applies schema migrations.
    MigrationEngine,
    /// Reads an existing database into a schema.
    IntrospectionEngine,
    /// Formats and validates schema files.
    SchemaFormatter,
}

impl EngineRole {
    /// All roles, in report order.
    pub const ALL: [EngineRole; 4] = [
        EngineRole::QueryEngine,
        EngineRole::MigrationEngine,
        EngineRole::IntrospectionEngine,
        EngineRole::SchemaFormatter,
    ];

    /// Label shown in the report.
    pub fn label(self) -> &'static str {
        match self {
            EngineRole::QueryEngine => "Query Engine (Binary)",
            EngineRole::MigrationEngine => "Migration Engine",
            EngineRole::IntrospectionEngine => "Introspection Engine",
            EngineRole::SchemaFormatter => "Format Binary",
        }
    }

    /// File name of the bundled binary, without platform suffix.
    pub fn binary_name(self) -> &'static str {
        match self {
            EngineRole::QueryEngine => "query-engine",
            EngineRole::MigrationEngine => "migration-engine",
            EngineRole::IntrospectionEngine => "introspection-engine",
            EngineRole::SchemaFormatter => "prisma-fmt",
        }
    }

    /// Environment variable that can point at a replacement binary.
    pub fn override_variable(self) -> &'static str {
        match self {
            EngineRole::QueryEngine => "PRISMA_QUERY_ENGINE_BINARY",
            EngineRole::MigrationEngine => "PRISMA_MIGRATION_ENGINE_BINARY",
            EngineRole::IntrospectionEngine => "PRISMA_INTROSPECTION_ENGINE_BINARY",
            EngineRole::SchemaFormatter => "PRISMA_FMT_BINARY",
        }
    }
}

impl fmt::Display for EngineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
