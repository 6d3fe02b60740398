#[macro_use]
mod common;

#[cfg(test)]
mod comment {
    tests! {
        line in comment is OK
        "1"
    }

    tests! {
        block in comment is OK
        "1"
        "2"
    }

    tests! {
        nested in comment is OK
        "ok"
    }

    tests! {
        division_still_works in comment is OK
        "5"
    }

    tests! {
        unterminated in comment is ERR
        "[line 2] Error: Unterminated block comment"
    }
}
