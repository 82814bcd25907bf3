use geo::{line_string, MultiLineString};

use crate::test::to_wkb;

pub(crate) fn linestring() -> Vec<u8> {
    to_wkb(line_string![
        (x: 0., y: 0.),
        (x: 1., y: 0.),
        (x: 1., y: 1.)
    ])
}

pub(crate) fn multilinestring() -> Vec<u8> {
    to_wkb(MultiLineString::new(vec![
        line_string![
            (x: 0., y: 0.),
            (x: 1., y: 0.)
        ],
        line_string![
            (x: 0., y: 5.),
            (x: 1., y: 5.),
            (x: 2., y: 6.)
        ],
    ]))
}
