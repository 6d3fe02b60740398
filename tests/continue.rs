#[macro_use]
mod common;

#[cfg(test)]
mod _continue {
    tests! {
        in_for in continue is OK
        "0"
        "2"
    }

    tests! {
        in_while in continue is OK
        "1"
        "3"
    }

    tests! {
        runs_increment in continue is OK
        "8"
    }

    tests! {
        no_loop in continue is ERR
        "[line 1] Error at 'continue': Cannot continue outside of a loop"
    }
}
