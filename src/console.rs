// 🖥️ Console Front-End - Menu loop and validated input port
//
// The registry never touches stdin/stdout; this module owns all prompting,
// re-prompting, and reporting. Every read helper is a small validation
// port: prompt, read one line, accept or complain and ask again. Generic
// over BufRead/Write so whole sessions can be scripted in tests.
//
// End of input is a clean exit, never an error.

use std::io::{self, BufRead, Write};

use crate::entities::{NewStudent, RoomPreferences, RoomType};
use crate::registry::{AllocationRequest, Hostel, PaymentOutcome};

// ============================================================================
// CONSOLE
// ============================================================================

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Banner header used by every screen.
    pub fn print_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n====================================")?;
        writeln!(self.output, "      {}", title)?;
        writeln!(self.output, "====================================\n")
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// One trimmed line of input, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    // ========================================================================
    // INPUT PORTS (re-prompt until valid or end of input)
    // ========================================================================

    /// Digits-only student id.
    pub fn read_student_id(&mut self, message: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            if !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(id) = line.parse::<u32>() {
                    return Ok(Some(id));
                }
            }
            self.say("[Error] Please enter digits only!")?;
        }
    }

    /// Non-empty name with no digits in it.
    pub fn read_student_name(&mut self, message: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            if line.is_empty() {
                self.say("[Error] Name cannot be empty!")?;
            } else if line.chars().any(|c| c.is_ascii_digit()) {
                self.say("[Error] Name cannot contain digits!")?;
            } else {
                return Ok(Some(line));
            }
        }
    }

    /// Non-negative amount (fees owed at registration).
    pub fn read_fee_amount(&mut self, message: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount >= 0.0 => return Ok(Some(amount)),
                _ => self.say("[Error] Invalid amount! Enter numeric value:")?,
            }
        }
    }

    /// Strictly positive amount (a payment).
    pub fn read_payment_amount(&mut self, message: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount > 0.0 => return Ok(Some(amount)),
                _ => self.say("[Error] Enter a valid payment amount:")?,
            }
        }
    }

    /// Strict yes/no answer.
    pub fn read_yes_no(&mut self, message: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match line.to_lowercase().as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" => return Ok(Some(false)),
                _ => self.say("[Error] Please answer yes or no.")?,
            }
        }
    }

    /// One of the advertised seating classes.
    pub fn read_room_type(&mut self, message: &str) -> io::Result<Option<RoomType>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match RoomType::parse(&line) {
                Some(room_type) => return Ok(Some(room_type)),
                None => self.say("[Error] Choose 1-seater, 2-seater or 4-seater.")?,
            }
        }
    }
}

// ============================================================================
// MENU LOOP
// ============================================================================

/// Drive the registry until the user picks Exit or input runs out.
pub fn run<R: BufRead, W: Write>(
    hostel: &mut Hostel,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.print_header("Hostel Management System")?;
        console.say("1. Add Student")?;
        console.say("2. Allocate Room")?;
        console.say("3. Display All Students")?;
        console.say("4. Pay Fees")?;
        console.say("5. Room Availability")?;
        console.say("6. Exit")?;

        let Some(choice) = console.prompt("Select an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                if add_student(hostel, console)?.is_none() {
                    return Ok(());
                }
            }
            "2" => {
                if allocate_room(hostel, console)?.is_none() {
                    return Ok(());
                }
            }
            "3" => display_students(hostel, console)?,
            "4" => {
                if pay_fees(hostel, console)?.is_none() {
                    return Ok(());
                }
            }
            "5" => room_availability(hostel, console)?,
            "6" => {
                console.say("Exiting program.")?;
                return Ok(());
            }
            _ => console.say("[Error] Invalid choice! Please enter a number.")?,
        }
    }
}

/// `Ok(None)` from a screen means input ran out mid-dialogue.
fn add_student<R: BufRead, W: Write>(
    hostel: &mut Hostel,
    console: &mut Console<R, W>,
) -> io::Result<Option<()>> {
    console.print_header("Student Registration")?;

    let Some(id) = console.read_student_id("Enter Student ID: ")? else {
        return Ok(None);
    };
    let Some(name) = console.read_student_name("Enter Student Name: ")? else {
        return Ok(None);
    };
    let Some(check_in_date) = console.prompt("Enter Check-in Date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };
    let Some(has_fees) = console.read_yes_no("Is there any fees due to pay? (yes/no): ")? else {
        return Ok(None);
    };
    let fees_due = if has_fees {
        let Some(amount) = console.read_fee_amount("Enter Fees Due: ")? else {
            return Ok(None);
        };
        amount
    } else {
        0.0
    };

    match hostel.register(NewStudent {
        id,
        name,
        check_in_date,
        fees_due,
    }) {
        Ok(_) => console.say("\n[Info] Student added successfully!")?,
        Err(err) => writeln!(console.output, "[Error] {}", err)?,
    }
    Ok(Some(()))
}

fn allocate_room<R: BufRead, W: Write>(
    hostel: &mut Hostel,
    console: &mut Console<R, W>,
) -> io::Result<Option<()>> {
    let Some(student_id) = console.read_student_id("Enter Student ID: ")? else {
        return Ok(None);
    };

    console.print_header("Available Rooms")?;
    print_room_labels(hostel, console)?;

    let Some(desired_room) =
        console.prompt("\nEnter the room name you want (e.g., R1 or 23): ")?
    else {
        return Ok(None);
    };
    let Some(room_type) =
        console.read_room_type("Enter Room Type (1-seater / 2-seater / 4-seater): ")?
    else {
        return Ok(None);
    };
    let Some(attached_washroom) =
        console.read_yes_no("Do you want an attached washroom? (yes/no): ")?
    else {
        return Ok(None);
    };
    if attached_washroom {
        console.say("[Note] Rooms with attached washrooms are being checked...")?;
    }

    let request = AllocationRequest {
        student_id,
        desired_room,
        preferences: RoomPreferences {
            room_type,
            attached_washroom,
        },
    };
    match hostel.allocate(request) {
        Ok(allocation) => writeln!(
            console.output,
            "[Success] Room {} allocated to {}!",
            allocation.room_label, allocation.student_name
        )?,
        Err(err) => writeln!(console.output, "[Error] {}", err)?,
    }
    Ok(Some(()))
}

fn display_students<R: BufRead, W: Write>(
    hostel: &Hostel,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.print_header("Student List")?;

    let students = hostel.list_students();
    if students.is_empty() {
        return console.say("[Info] No students registered yet.");
    }

    writeln!(
        console.output,
        "{:<5} {:<20} {:<15} {:<12} {:<10}",
        "ID", "Name", "Room", "Check-in", "Fees Due"
    )?;
    for student in students {
        writeln!(console.output, "{}", student.display_line())?;
    }
    Ok(())
}

fn pay_fees<R: BufRead, W: Write>(
    hostel: &mut Hostel,
    console: &mut Console<R, W>,
) -> io::Result<Option<()>> {
    let Some(student_id) = console.read_student_id("Enter Student ID for fee payment: ")? else {
        return Ok(None);
    };

    // Show what is owed before asking for an amount
    let fees_due = match hostel.find_student(student_id) {
        None => {
            console.say("[Error] Student not found.")?;
            return Ok(Some(()));
        }
        Some(student) => student.fees_due,
    };
    if fees_due <= 0.0 {
        console.say("[Info] No pending fees for this student.")?;
        return Ok(Some(()));
    }

    writeln!(console.output, "Total Due: ${:.2}", fees_due)?;
    let Some(amount) = console.read_payment_amount("Enter amount to pay: ")? else {
        return Ok(None);
    };

    match hostel.pay_fees(student_id, amount) {
        Ok(PaymentOutcome::Settled { change }) => {
            writeln!(console.output, "[Info] Fees fully paid! Change: ${:.2}", change)?
        }
        Ok(PaymentOutcome::Partial { remaining }) => writeln!(
            console.output,
            "[Info] Partial payment accepted. Remaining Due: ${:.2}",
            remaining
        )?,
        Ok(PaymentOutcome::NoFeesDue) => {
            console.say("[Info] No pending fees for this student.")?
        }
        Err(err) => writeln!(console.output, "[Error] {}", err)?,
    }
    Ok(Some(()))
}

fn room_availability<R: BufRead, W: Write>(
    hostel: &Hostel,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.print_header("Available Rooms")?;
    print_room_labels(hostel, console)
}

fn print_room_labels<R: BufRead, W: Write>(
    hostel: &Hostel,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let labels = hostel.available_rooms();
    if labels.is_empty() {
        return console.say("[Info] No rooms available.");
    }
    for label in &labels {
        write!(console.output, "{}  ", label)?;
    }
    writeln!(console.output)
}

// ============================================================================
// TESTS
// ============================================================================
