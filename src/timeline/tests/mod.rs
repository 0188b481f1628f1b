//! Unit tests for the timeline bounded context.
