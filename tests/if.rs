#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        then in if is OK
        "then"
    }

    tests! {
        else_branch in if is OK
        "else"
    }

    tests! {
        dangling_else in if is OK
        "b"
    }

    tests! {
        condition_expression in if is OK
        "in range"
    }

    tests! {
        missing_paren in if is ERR
        "[line 1] Error at 'true': Expect '(' after 'if'"
    }
}
