// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

/// (constant, variable, doc line)
const VARS: &[(&str, &str, &str)] = &[(
    "BTK_PC_LOG",
    "BTK_PC_LOG",
    "tracing filter directive for stderr logging, e.g. `debug` or `btkpc_core=trace`",
)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    for (const_name, env_name, doc) in VARS {
        writeln!(f, "/// {doc}")?;
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    let names: Vec<&str> = VARS.iter().map(|(name, _, _)| *name).collect();
    writeln!(f, "/// Every variable the CLI reads.")?;
    writeln!(f, "pub const ALL: &[&str] = &[{}];", names.join(", "))?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
