//! Mock implementations of simulator traits.
