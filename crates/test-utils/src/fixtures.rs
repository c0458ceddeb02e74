// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Sample Kusto queries for testing

/// Sample queries exercising the classification edge cases
pub struct QueryFixtures;

impl QueryFixtures {
    // ===== Plain references =====

    /// One unqualified table reference
    pub const fn single_table() -> &'static str {
        "Events | take 10"
    }

    /// The same table referenced twice
    pub const fn repeated_table() -> &'static str {
        "Events | union Events"
    }

    /// Two different tables
    pub const fn two_tables() -> &'static str {
        "Events | join kind=inner AuditLog on EventId"
    }

    // ===== Exclusion cases =====

    /// A let binding shadowing a table name
    pub const fn let_shadowing() -> &'static str {
        "let Foo = 5;\nFoo | take 10"
    }

    /// A function call sharing a table's name
    pub const fn function_call() -> &'static str {
        "MyFunc(1,2) | take 5"
    }

    /// An already fully-qualified reference
    pub const fn already_qualified() -> &'static str {
        "cluster('x').database('y').Events"
    }

    // ===== Region handling =====

    /// Table names hidden inside strings and comments
    pub const fn names_in_regions() -> &'static str {
        "Events | where Msg == 'Orders' // Orders\n/* Orders */ | count"
    }
}
