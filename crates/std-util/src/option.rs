#[macro_export]
macro_rules! assert_none {
    ($e:expr $(, $($t:tt)* )?) => {
        match &$e {
            None => {}
            actual => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `None`; actual={:?}", actual);

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; actual=None; expr=`{}`", stringify!($e)),
        }
    };
}
