pub(super) const ENTRIES: &[(&str, &str)] = &[
    // navigation
    ("navHome", "Nyumbani"),
    ("navBook", "Weka Nafasi"),
    ("navDashboard", "Dashibodi"),
    ("navAdmin", "Msimamizi"),
    ("toggleTheme", "Badilisha mandhari"),
    ("toggleMenu", "Menyu"),
    ("notFound", "Ukurasa haupatikani."),
    // home
    ("homeTitle", "Huduma Bora za Magari Unazoweza Kuamini"),
    ("homeSubtitle", "Uchunguzi, matengenezo na huduma za kawaida na mafundi stadi, ukipata taarifa kila hatua."),
    ("bookNow", "Weka Nafasi Sasa"),
    ("aboutTitle", "Kuhusu HagaGandi"),
    ("aboutSubtitle", "Tunachanganya vifaa vya kisasa vya uchunguzi na uzoefu wa miaka mingi ili gari lako liwe salama, imara na katika hali bora."),
    ("ourServices", "Huduma Zetu"),
    ("serviceDiagnostics", "Uchunguzi"),
    ("serviceRepairs", "Matengenezo"),
    ("serviceMaintenance", "Huduma ya Kawaida"),
    ("serviceDiagnosticsText", "Uchunguzi wa kompyuta wa hali ya juu kugundua hitilafu haraka na kwa usahihi."),
    ("serviceRepairsText", "Matengenezo ya mitambo, bodi na umeme kwa vipuri halisi na mikono stadi."),
    ("serviceMaintenanceText", "Mipango ya huduma ya mara kwa mara kuweka gari lako imara na la kuaminika."),
    ("testimonialsTitle", "Wateja Wetu Wanasema"),
    ("testimonialsSubtitle", "Maoni halisi kutoka kwa madereva wanaotuamini na magari yao."),
    ("reviewPlaceholder", "Andika maoni yako..."),
    ("selectRating", "Chagua Ukadiriaji"),
    ("rating5", "Bora Sana"),
    ("rating4", "Nzuri"),
    ("rating3", "Wastani"),
    ("rating2", "Duni"),
    ("rating1", "Mbaya Sana"),
    ("submitFeedback", "Tuma Maoni"),
    // booking form
    ("bookingTitle", "Weka Miadi"),
    ("bookingSubtitle", "Tueleze kuhusu gari lako na uchague muda unaokufaa."),
    ("bookingName", "Jina Kamili"),
    ("bookingEmail", "Barua Pepe"),
    ("bookingPhone", "Namba ya Simu"),
    ("bookingCar", "Aina ya Gari"),
    ("bookingService", "Chagua Huduma"),
    ("bookingDate", "Chagua Tarehe"),
    ("bookingTime", "Chagua Muda"),
    ("bookingSubmit", "Thibitisha Miadi"),
    ("bookingProcessing", "Inashughulikiwa..."),
    ("bookingConfirmedTitle", "Miadi Imethibitishwa 🎉"),
    ("bookingConfirmedText", "Ombi lako la miadi limepokelewa. Tutakujulisha likishathibitishwa."),
    // client dashboard
    ("welcomeBack", "Karibu tena,"),
    ("clientSubtitle", "Hii ndiyo hali ya hivi punde ya matengenezo ya gari lako."),
    ("currentProgress", "Maendeleo ya Matengenezo"),
    ("taskComplete", "Imekamilika"),
    ("taskPending", "Inasubiri"),
    ("requestProgress", "Omba Taarifa ya Maendeleo"),
    ("requestSent", "Ombi limetumwa! Tutakujulisha hivi karibuni."),
    ("bookingSummary", "Muhtasari wa Miadi"),
    ("summaryDate", "Tarehe:"),
    ("summaryTime", "Muda:"),
    ("summaryService", "Aina ya Huduma:"),
    ("summaryStatus", "Hali:"),
    ("statusUpcoming", "Inakuja"),
    ("statusActive", "Inaendelea"),
    ("statusComplete", "Imekamilika"),
    ("noBookings", "Bado hakuna miadi."),
    // admin dashboard
    ("dashboardTitle", "Dashibodi ya Msimamizi"),
    ("dashboardSubtitle", "Simamia miadi na uwajulishe wateja."),
    ("selectBooking", "Chagua Miadi"),
    ("clientCar", "Gari la {client} — {car}"),
    ("addTask", "Ongeza kazi mpya ya matengenezo..."),
    ("addTaskButton", "Ongeza"),
    ("sendProgress", "Tuma Taarifa ya Maendeleo"),
    ("markComplete", "Weka Kuwa Imekamilika"),
    ("progressUpdate", "Taarifa ya maendeleo imetumwa kwa"),
    ("completionAlert", "Taarifa ya kukamilika imetumwa kwa"),
    // footer
    ("footerBlurb", "Usahihi, utendaji na shauku, tukiboresha huduma za magari kwa utaalamu na teknolojia ya kuaminika."),
    ("quickLinks", "Viungo vya Haraka"),
    ("footerBook", "Weka Miadi"),
    ("footerAdmin", "Lango la Msimamizi"),
    ("contactTitle", "Mawasiliano"),
    ("rightsReserved", "Haki zote zimehifadhiwa."),
];
