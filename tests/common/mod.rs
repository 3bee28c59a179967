//! Common test utilities for siclang integration tests

use siclang::{Array, Interpreter, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// A `Write` sink that can be read back after the interpreter is done
/// with its clone.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("sink lock poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("sink lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run a program line by line on a fresh session; returns the final stack
/// plus everything written to the output and diagnostic sinks.
pub fn run(input: &str) -> (Vec<Array>, String, String) {
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let mut interp = Interpreter::with_sinks(Box::new(out.clone()), Box::new(err.clone()));
    for line in input.lines() {
        interp.process(line);
    }
    (interp.stack().to_vec(), out.contents(), err.contents())
}

/// Final stack only.
#[allow(dead_code)]
pub fn run_stack(input: &str) -> Vec<Array> {
    run(input).0
}

/// Printed output only.
#[allow(dead_code)]
pub fn run_output(input: &str) -> String {
    run(input).1
}

/// Diagnostics only.
#[allow(dead_code)]
pub fn run_errors(input: &str) -> String {
    run(input).2
}

#[allow(dead_code)]
pub fn nums(ns: &[f64]) -> Array {
    ns.iter().map(|n| Value::Number(*n)).collect()
}
