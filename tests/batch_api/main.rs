//! Batch execution tests: grouping, capacity, sequential and concurrent
//! strategies, and replay equivalence against a sequential model.


mod capacity;
mod replay;
