use std::net::Ipv4Addr;

use rb_interval_index::{Interval, IntervalTree, Span};

/// An address block owned by some network.
struct Block {
    owner: &'static str,
    first: Ipv4Addr,
    last: Ipv4Addr,
}

impl Block {
    fn span(&self) -> Span {
        Span::new(u32::from(self.first), u32::from(self.last))
    }
}

fn main() {
    let blocks = [
        Block {
            owner: "campus",
            first: Ipv4Addr::new(10, 0, 0, 0),
            last: Ipv4Addr::new(10, 255, 255, 255),
        },
        Block {
            owner: "lab",
            first: Ipv4Addr::new(10, 1, 0, 0),
            last: Ipv4Addr::new(10, 1, 255, 255),
        },
        Block {
            owner: "printers",
            first: Ipv4Addr::new(10, 1, 7, 0),
            last: Ipv4Addr::new(10, 1, 7, 255),
        },
        Block {
            owner: "dmz",
            first: Ipv4Addr::new(192, 0, 2, 0),
            last: Ipv4Addr::new(192, 0, 2, 255),
        },
    ];

    let mut tree = IntervalTree::new();
    for block in &blocks {
        tree.add_interval(Interval::with_span(block.span(), block))
            .expect("out of memory");
    }

    // every block an address belongs to, outermost first
    let addr = Ipv4Addr::new(10, 1, 7, 42);
    let owners: Vec<_> = tree
        .query_containing(Span::point(u32::from(addr)))
        .expect("out of memory")
        .iter()
        .map(|i| i.payload.owner)
        .collect();
    println!("{addr} is in {owners:?}");
    assert_eq!(owners, ["campus", "lab", "printers"]);

    // blocks entirely inside 10.1.0.0/16
    let lab = blocks[1].span();
    let nested: Vec<_> = tree
        .query_contained(lab)
        .expect("out of memory")
        .iter()
        .map(|i| i.payload.owner)
        .collect();
    println!("inside {}..{}: {nested:?}", blocks[1].first, blocks[1].last);
    assert_eq!(nested, ["lab", "printers"]);

    // anything touching a range straddling two blocks
    let probe = Span::new(
        u32::from(Ipv4Addr::new(10, 255, 255, 0)),
        u32::from(Ipv4Addr::new(192, 0, 2, 10)),
    );
    let touched = tree
        .query_overlapping(probe)
        .expect("out of memory")
        .len();
    println!("{touched} blocks touch the probe range");
    assert_eq!(touched, 2);
}
