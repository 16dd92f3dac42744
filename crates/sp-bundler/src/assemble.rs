//! Stage 7: Assemble — frame the shrunk body and write the artifact.

use std::path::Path;

use sp_core::{Result, SpError};

use crate::rename::{self, RenameTable};

/// Notice prepended to the artifact so judges know what they are reading.
const NOTICE: &str = r#"/*
Attention!
This file is a machine-bundled and shrunk (and therefore very obfuscated)
version of a multi-file interpreter project, produced so it can run on
platforms that only accept a single source file.

The actual program is at the very bottom of this file, in function main.

Please do not disqualify this code!
*/
"#;

/// Compiler hint plus the minimal standard includes the body relies on.
const PREAMBLE: &str = "#pragma GCC optimize(\"O3\")\n\
#include <cstdlib>\n\
#include <cstddef>\n\
#include <string>\n\
#include <vector>\n";

const LICENSE: &str = r#"
/*
 Copyright (c) 2024 the bundled project's authors

 Permission is hereby granted, free of charge, to any person obtaining a copy of
 this software and associated documentation files (the "Software"), to deal in
 the Software without restriction, including without limitation the rights to
 use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
 the Software, and to permit persons to whom the Software is furnished to do so,
 subject to the following conditions:

 The above copyright notice and this permission notice shall be included in all
 copies or substantial portions of the Software.

 THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
 FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
 COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
 IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
 CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 */
"#;

/// Fixed driver: fatal-abort handler plus a demonstration program that runs
/// the bundled library's lexer, parser and runtime end to end. The embedded
/// script reads an integer array, sorts a copy, and prints the 1-based
/// position of the largest element.
const DRIVER: &str = r##"
#include <chrono>
using namespace std::chrono;
using namespace Cotton;
using namespace Cotton::Builtin;

void emergency_error_exit() {
    exit(1);
}

int main(int argc, char *argv[]) {

const char *src = R"(
arr = make(Array)
    .resize(read(Integer))
    .apply(function(x){x=read(Integer);});

target = arr.copy().sort(function(a,b){a>b;})[1];

for i = 0; i < arr.size(); i++; {
    if arr[i] == target; {
        println(i + 1);
        return;
    }
}
)";

    ErrorManager em(emergency_error_exit);
    Lexer        lx(&em);
    Parser       pr(&em);
    NamesManager nmgr;

    auto strsrc = std::string(src);

    auto tokens = lx.process(strsrc);
    for (auto &token : tokens) {
        token.nameid = nmgr.getId(token.data);
    }
    auto program = pr.parse(tokens);

    GCDefaultStrategy gcst;
    Runtime           rt(&gcst, &em, &nmgr);
    auto res        = rt.execute(program, false);
    delete program;
}
"##;

/// Frame the shrunk library body: notice and preamble in front, license and
/// driver behind. The body itself is not transformed any further; only the
/// driver snippet is rewritten through the run's rename table so its
/// references resolve against the renamed library.
pub fn assemble(body: &str, table: &RenameTable) -> String {
    let driver = rename::apply_table(DRIVER, table);
    let mut artifact =
        String::with_capacity(NOTICE.len() + PREAMBLE.len() + body.len() + LICENSE.len() + driver.len());
    artifact.push_str(NOTICE);
    artifact.push_str(PREAMBLE);
    artifact.push_str(body);
    artifact.push_str(LICENSE);
    artifact.push_str(&driver);
    artifact
}

/// Write the final artifact. A failed write is fatal; no partial bundle is
/// ever left behind as a success.
pub fn write_artifact(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| SpError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
