use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn densepath() -> Command {
    cargo_bin_cmd!("densepath")
}

/// Edge list matching the built-in demo graph
#[allow(dead_code)]
pub const DEMO_EDGE_LIST: &str = "\
# from to weight
0 1 4
0 2 2
1 2 3
2 3 1
1 3 5
";
