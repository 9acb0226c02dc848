//! Unit tests for simulation driving.
