// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = std::env::var_os("OUT_DIR").expect("cargo always sets OUT_DIR");
    let rustc = rustc_version::version().expect("cannot query the rustc version");
    let mut f = File::create(Path::new(&out_dir).join("build_env.rs"))
        .expect("cannot create the build environment file");
    writeln!(f, "pub(crate) const RUSTC_VERSION: &str = \"{rustc}\";")
        .expect("cannot write the rustc version");
}
