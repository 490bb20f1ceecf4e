//! Built-in catalogues of canonical choices.
//!
//! Each entry is `<name>.<priority>`; a name may appear at several
//! priorities when more than one template exists for it.

use crate::choice::{Catalogue, ChoiceError};

pub const LANGS: &[&str] = &[
    "c.0", "cpp.0", "cpp.1", "java.0", "php.0", "py.0", "py.1", "rs.0",
];

pub const RUNNERS: &[&str] = &["make.0", "make.1", "sh.0"];

pub fn langs() -> Result<Catalogue, ChoiceError> {
    Catalogue::from_strs(LANGS)
}

pub fn runners() -> Result<Catalogue, ChoiceError> {
    Catalogue::from_strs(RUNNERS)
}

/// Skeleton written into a solution file for a language and priority.
pub fn lang_template(name: &str, priority: u32) -> &'static str {
    match (name, priority) {
        ("c", _) => "#include <stdio.h>\n\nint main(void) {\n    return 0;\n}\n",
        ("cpp", 0) => "#include <bits/stdc++.h>\n\nusing namespace std;\n\nint main() {\n    ios::sync_with_stdio(false);\n    cin.tie(nullptr);\n    return 0;\n}\n",
        ("cpp", _) => "#include <iostream>\n\nint main() {\n    return 0;\n}\n",
        ("java", _) => "import java.util.*;\n\npublic class Main {\n    public static void main(String[] args) {\n        Scanner in = new Scanner(System.in);\n    }\n}\n",
        ("php", _) => "<?php\n\n$lines = file('php://stdin');\n",
        ("py", 0) => "import sys\n\n\ndef main():\n    data = sys.stdin.read().split()\n\n\nif __name__ == \"__main__\":\n    main()\n",
        ("py", _) => "import sys\n\ninput = sys.stdin.readline\n",
        ("rs", _) => "use std::io::{self, Read};\n\nfn main() {\n    let mut input = String::new();\n    io::stdin().read_to_string(&mut input).unwrap();\n}\n",
        _ => "",
    }
}

/// File name and contents written for a runner and priority.
pub fn runner_file(name: &str, priority: u32) -> Option<(&'static str, &'static str)> {
    match (name, priority) {
        ("sh", _) => Some((
            "run.sh",
            "#!/bin/sh\n# Usage: ./run.sh <command> [input files...]\ncmd=$1\nshift\nfor input in \"$@\"; do\n    echo \"== $input\"\n    $cmd < \"$input\"\ndone\n",
        )),
        ("make", 0) => Some((
            "Makefile",
            "CXXFLAGS ?= -O2 -Wall -std=c++17\n\nsolution: solution.cpp\n\t$(CXX) $(CXXFLAGS) -o $@ $<\n\nclean:\n\trm -f solution\n",
        )),
        ("make", _) => Some((
            "Makefile",
            "CXXFLAGS ?= -g -O0 -Wall -std=c++17 -fsanitize=address,undefined\n\nsolution: solution.cpp\n\t$(CXX) $(CXXFLAGS) -o $@ $<\n\nclean:\n\trm -f solution\n",
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Token;

    #[test]
    fn test_builtin_catalogues_are_canonical() {
        assert!(langs().is_ok());
        assert!(runners().is_ok());
    }

    #[test]
    fn test_every_lang_has_template() {
        for token in langs().unwrap().entries() {
            let Token::Prioritized { name, priority } = token else {
                panic!("non-canonical entry {token}");
            };
            assert!(!lang_template(name, *priority).is_empty(), "{token}");
        }
    }

    #[test]
    fn test_every_runner_has_file() {
        for token in runners().unwrap().entries() {
            let Token::Prioritized { name, priority } = token else {
                panic!("non-canonical entry {token}");
            };
            assert!(runner_file(name, *priority).is_some(), "{token}");
        }
    }

    #[test]
    fn test_best_lang_priority() {
        let catalogue = langs().unwrap();
        assert_eq!(catalogue.best("py").unwrap().to_string(), "py.0");
        assert_eq!(catalogue.best("go"), None);
    }
}
