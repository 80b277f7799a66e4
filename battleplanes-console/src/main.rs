use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{value_t, App, Arg, ArgMatches};
use enumflags2::BitFlags;
use log::{info, warn};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use battleplanes::{
    board::{rectangular::RectDimensions, Cell, Highlight, HighlightGrid},
    interaction::{
        BombardmentSelector, PlacementMachine, PlaneSelection, PointerEvent, TargetSelection,
    },
    shapes::Plane,
    Orientation, OrientationCycle,
};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = App::new("Battleplanes")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Place a plane or pick a bombardment target on the command line.")
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("COLUMNS")
                .help("number of columns in the grid")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .value_name("ROWS")
                .help("number of rows in the grid")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .value_name("MODE")
                .help("whether to place a plane or pick a bombardment target")
                .takes_value(true)
                .possible_values(&["placement", "place", "bombard", "bomb"])
                .case_insensitive(true)
                .default_value("placement"),
        )
        .arg(
            Arg::with_name("orientation")
                .short("o")
                .long("orientation")
                .value_name("DIR")
                .help("orientation the first preview faces: N, E, S, or W")
                .takes_value(true),
        )
        .get_matches();

    let dim = dimensions(&matches);
    let mut grid = HighlightGrid::new(dim);
    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());

    info!(
        "starting on a {}x{} grid",
        grid.dimensions().width(),
        grid.dimensions().height()
    );
    match matches.value_of("mode").map(|mode| mode.to_ascii_lowercase()) {
        Some(ref mode) if mode.starts_with("bomb") => {
            if matches.is_present("orientation") {
                warn!("--orientation has no effect when picking a bombardment target");
            }
            let target = choose_target(&mut grid, &mut input)?;
            println!("bombard {}", target);
        }
        _ => {
            let cycle = OrientationCycle::starting_at(orientation(&matches));
            let mut machine = PlacementMachine::with_shape(Plane, cycle);
            let plane = choose_placement(&mut grid, &mut machine, &mut input)?;
            println!("plane {}", plane);
        }
    }
    Ok(())
}

/// Read the grid size from the command line, exiting with a usage error if it is
/// invalid.
fn dimensions(matches: &ArgMatches) -> RectDimensions {
    let width = clap::value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit());
    let height = clap::value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit());
    RectDimensions::try_new(width, height).unwrap_or_else(|err| {
        clap::Error::with_description(&err.to_string(), clap::ErrorKind::InvalidValue).exit()
    })
}

/// Read the starting orientation from the command line, defaulting to north.
fn orientation(matches: &ArgMatches) -> Orientation {
    match matches.value_of("orientation") {
        None => Orientation::North,
        Some(value) => value.parse().unwrap_or_else(|err: battleplanes::ParseOrientationError| {
            clap::Error::with_description(&err.to_string(), clap::ErrorKind::InvalidValue).exit()
        }),
    }
}

/// Commands shared by both modes.
enum Command {
    /// Pointer event to forward to the state machine.
    Pointer(PointerEvent),
    /// Pointer event aimed at whichever cell the pointer is over.
    AtPointer(fn(Cell) -> PointerEvent),
    /// Pick and commit a random placement.
    Random,
    /// Submit the current selection.
    Done,
    Help,
}

/// Matchers for commands with a cell argument.
static HOVER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?x)(?:hover|over|move|go)\s+(?:(?:to|on|at)\s+)?(?P<cell>[a-z]+[0-9]+)$")
        .unwrap()
});
static LEAVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?x)(?:leave|out)\s+(?P<cell>[a-z]+[0-9]+)$").unwrap());
static CLICK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?x)(?:click|commit|place|fire|hit)\s+(?:(?:at|on)\s+)?(?P<cell>[a-z]+[0-9]+)$")
        .unwrap()
});

/// Parse one line of input into a [`Command`], reporting why if it can't be parsed.
fn parse_command(input: &str, dim: &RectDimensions) -> Option<Command> {
    let event_at = |captures: regex::Captures, event: fn(Cell) -> PointerEvent| {
        let text = captures.name("cell").unwrap().as_str();
        match text.parse::<Cell>() {
            Ok(cell) if cell.x < dim.width() && cell.y < dim.height() => {
                Some(Command::Pointer(event(cell)))
            }
            Ok(cell) => {
                println!("{} is outside of the {}x{} grid.", cell, dim.width(), dim.height());
                None
            }
            Err(err) => {
                println!("{}", err);
                None
            }
        }
    };
    match input {
        "?" | "help" | "h" => Some(Command::Help),
        "rotate" | "r" | "turn" => Some(Command::Pointer(PointerEvent::Rotate)),
        "leave" | "out" => Some(Command::AtPointer(PointerEvent::HoverEnd)),
        "click" | "commit" | "place" | "fire" | "hit" => {
            Some(Command::AtPointer(PointerEvent::Commit))
        }
        "random" | "rand" => Some(Command::Random),
        "done" | "send" | "submit" => Some(Command::Done),
        other => {
            if let Some(captures) = HOVER.captures(other) {
                event_at(captures, PointerEvent::Hover)
            } else if let Some(captures) = LEAVE.captures(other) {
                event_at(captures, PointerEvent::HoverEnd)
            } else if let Some(captures) = CLICK.captures(other) {
                event_at(captures, PointerEvent::Commit)
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        }
    }
}

/// Drive the placement machine from player input until the player submits a
/// committed placement.
fn choose_placement(
    grid: &mut HighlightGrid,
    machine: &mut PlacementMachine,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<PlaneSelection> {
    let mut rng = rand::thread_rng();
    println!();
    println!("Place your plane. Type help or ? for commands.");
    loop {
        println!();
        match machine.committed() {
            Some(plane) if !plane.fits_within(&*grid) => {
                println!("Placed at {}, but part of the plane falls off the map.", plane)
            }
            Some(plane) => println!("Placed at {}, type done to send it.", plane),
            None => println!("No plane placed yet."),
        }
        println!("Facing {}.", machine.orientation());
        show_grid(grid, machine.committed());
        println!();

        let dim = *grid.dimensions();
        let cmd = input.read_input_lower("> ", |line| parse_command(line, &dim))?;
        match cmd {
            Command::Pointer(event) => {
                machine.handle(grid, event);
            }
            Command::AtPointer(event) => match machine.preview() {
                Some(preview) => {
                    machine.handle(grid, event(preview.head()));
                }
                None => println!("Hover over a cell first."),
            },
            Command::Random => {
                let head = dim.random_cell(&mut rng);
                let facing: Orientation = rng.gen();
                while machine.orientation() != facing {
                    machine.on_rotate(grid);
                }
                machine.on_hover(grid, head);
                machine.on_commit(grid, head);
            }
            Command::Done => match machine.committed() {
                Some(plane) if plane.fits_within(&*grid) => return Ok(plane),
                Some(_) => println!("The plane must fit on the map before it can be sent."),
                None => println!("You must place your plane first!"),
            },
            Command::Help => println!(
                "Available Commands:
    hover <cell>    move the pointer over a cell, previewing the plane with its head there.
    leave           move the pointer off the current cell.
    rotate          turn the plane a quarter clockwise.
    commit [<cell>] place the plane at the given cell, or under the pointer.
    random          place the plane at a random cell and orientation.
    done            send the placed plane.

Cells are written as a column letter and a row number, for example \"e5\"."
            ),
        }
    }
}

/// Drive the bombardment selector from player input until a target is clicked.
fn choose_target(
    grid: &mut HighlightGrid,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<TargetSelection> {
    let mut selector = BombardmentSelector::new();
    let mut rng = rand::thread_rng();
    println!();
    println!("Pick a cell to bombard. Type help or ? for commands.");
    loop {
        println!();
        show_grid(grid, None);
        println!();

        let dim = *grid.dimensions();
        let cmd = input.read_input_lower("> ", |line| parse_command(line, &dim))?;
        let event = match cmd {
            Command::Pointer(PointerEvent::Rotate) => {
                println!("There is nothing to rotate when bombarding.");
                continue;
            }
            Command::Pointer(event) => event,
            Command::AtPointer(event) => match selector.last_hovered() {
                Some(cell) => event(cell),
                None => {
                    println!("Hover over a cell first.");
                    continue;
                }
            },
            Command::Random => PointerEvent::Commit(dim.random_cell(&mut rng)),
            Command::Done => {
                println!("Click a cell to bombard it.");
                continue;
            }
            Command::Help => {
                println!(
                    "Available Commands:
    hover <cell>    move the pointer over a cell, marking it as the target.
    leave           move the pointer off the current cell.
    fire [<cell>]   bombard the given cell, or the one under the pointer.
    random          bombard a random cell.

Cells are written as a column letter and a row number, for example \"b3\"."
                );
                continue;
            }
        };
        if let Some(target) = selector.handle(grid, event) {
            return Ok(target);
        }
    }
}

/// Glyph shown for a single cell.
enum CellGlyph {
    Empty,
    Preview,
    Committed,
    Both,
    Target,
    Head(Orientation),
}

impl CellGlyph {
    fn new(flags: BitFlags<Highlight>) -> Self {
        if flags.contains(Highlight::HitPreview) {
            CellGlyph::Target
        } else if flags.contains(Highlight::Preview | Highlight::Committed) {
            CellGlyph::Both
        } else if flags.contains(Highlight::Committed) {
            CellGlyph::Committed
        } else if flags.contains(Highlight::Preview) {
            CellGlyph::Preview
        } else {
            CellGlyph::Empty
        }
    }
}

impl fmt::Display for CellGlyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            CellGlyph::Empty => "~~",
            CellGlyph::Preview => "+",
            CellGlyph::Committed => "o",
            CellGlyph::Both => "*",
            CellGlyph::Target => "x",
            CellGlyph::Head(Orientation::North) => "^",
            CellGlyph::Head(Orientation::East) => ">",
            CellGlyph::Head(Orientation::South) => "v",
            CellGlyph::Head(Orientation::West) => "<",
        })
    }
}

/// Print the grid with a letter header and numbered rows. The committed head, if
/// any, is drawn as an arrow pointing the way the plane faces.
fn show_grid(grid: &HighlightGrid, committed: Option<PlaneSelection>) {
    print!("    ");
    for x in 0..grid.dimensions().width() {
        print!("{:^4}", Cell::new(x, 0).address().letters());
    }
    println!();
    for (y, row) in grid.iter_rows().enumerate() {
        print!("{:>3} ", y + 1);
        for (cell, flags) in row {
            let glyph = match committed {
                Some(plane) if plane.head() == cell => CellGlyph::Head(plane.orientation()),
                _ => CellGlyph::new(flags),
            };
            print!("{:^4}", glyph);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
