//! Shared test utilities for lists-db unit tests.
