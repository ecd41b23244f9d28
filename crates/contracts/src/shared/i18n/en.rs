pub(super) const ENTRIES: &[(&str, &str)] = &[
    // navigation
    ("navHome", "Home"),
    ("navBook", "Book"),
    ("navDashboard", "Dashboard"),
    ("navAdmin", "Admin"),
    ("toggleTheme", "Toggle theme"),
    ("toggleMenu", "Menu"),
    ("notFound", "Page not found."),
    // home
    ("homeTitle", "Expert Car Care You Can Trust"),
    ("homeSubtitle", "Diagnostics, repairs and maintenance by skilled mechanics, with updates at every step."),
    ("bookNow", "Book Now"),
    ("aboutTitle", "About HagaGandi"),
    ("aboutSubtitle", "We combine modern diagnostic tools with years of hands-on experience to keep your car safe, reliable and running at its best."),
    ("ourServices", "Our Services"),
    ("serviceDiagnostics", "Diagnostics"),
    ("serviceRepairs", "Repairs"),
    ("serviceMaintenance", "Maintenance"),
    ("serviceDiagnosticsText", "High-precision computer diagnostics for quick, accurate fault detection."),
    ("serviceRepairsText", "Mechanical, body, and electrical repairs with authentic parts and skilled hands."),
    ("serviceMaintenanceText", "Scheduled maintenance plans to keep your ride smooth and reliable."),
    ("testimonialsTitle", "What Our Clients Say"),
    ("testimonialsSubtitle", "Real feedback from drivers who trust us with their cars."),
    ("reviewPlaceholder", "Write your review..."),
    ("selectRating", "Select Rating"),
    ("rating5", "Excellent"),
    ("rating4", "Good"),
    ("rating3", "Average"),
    ("rating2", "Poor"),
    ("rating1", "Terrible"),
    ("submitFeedback", "Submit Feedback"),
    // booking form
    ("bookingTitle", "Book an Appointment"),
    ("bookingSubtitle", "Tell us about your car and pick a time that suits you."),
    ("bookingName", "Full Name"),
    ("bookingEmail", "Email Address"),
    ("bookingPhone", "Phone Number"),
    ("bookingCar", "Car Model"),
    ("bookingService", "Select Service"),
    ("bookingDate", "Select Date"),
    ("bookingTime", "Select Time"),
    ("bookingSubmit", "Confirm Booking"),
    ("bookingProcessing", "Processing..."),
    ("bookingConfirmedTitle", "Booking Confirmed 🎉"),
    ("bookingConfirmedText", "Your appointment request has been received. We'll notify you once it's confirmed."),
    // client dashboard
    ("welcomeBack", "Welcome back,"),
    ("clientSubtitle", "Here's your latest car repair status."),
    ("currentProgress", "Current Repair Progress"),
    ("taskComplete", "Complete"),
    ("taskPending", "Pending"),
    ("requestProgress", "Request Progress Update"),
    ("requestSent", "Request sent! We'll update you shortly."),
    ("bookingSummary", "Booking Summary"),
    ("summaryDate", "Date:"),
    ("summaryTime", "Time:"),
    ("summaryService", "Service Type:"),
    ("summaryStatus", "Status:"),
    ("statusUpcoming", "Upcoming"),
    ("statusActive", "In Progress"),
    ("statusComplete", "Complete"),
    ("noBookings", "There are no bookings yet."),
    // admin dashboard
    ("dashboardTitle", "Admin Dashboard"),
    ("dashboardSubtitle", "Manage bookings and keep clients informed."),
    ("selectBooking", "Select Booking"),
    ("clientCar", "{client}'s Car — {car}"),
    ("addTask", "Add a new repair task..."),
    ("addTaskButton", "Add"),
    ("sendProgress", "Send Progress Update"),
    ("markComplete", "Mark as Complete"),
    ("progressUpdate", "Progress update sent to"),
    ("completionAlert", "Completion alert sent to"),
    // footer
    ("footerBlurb", "Precision, performance, and passion, redefining car care with trusted expertise and technology."),
    ("quickLinks", "Quick Links"),
    ("footerBook", "Book Appointment"),
    ("footerAdmin", "Admin Portal"),
    ("contactTitle", "Contact"),
    ("rightsReserved", "All rights reserved."),
];
