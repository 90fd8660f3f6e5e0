// Export tables for the crypto and ssl shared libraries. Produced by the
// export-table generator from the upstream linker scripts; each table ends
// with an empty terminator entry. Do not edit by hand.

pub const CRYPTO_EXPORT_TABLE: &[&str] = &[
    "OPENSSL_init_crypto",
    "OPENSSL_cleanup",
    "OpenSSL_version",
    "OpenSSL_version_num",
    "CRYPTO_malloc",
    "CRYPTO_zalloc",
    "CRYPTO_free",
    "CRYPTO_memcmp",
    "ERR_get_error",
    "ERR_peek_error",
    "ERR_peek_last_error",
    "ERR_error_string",
    "ERR_error_string_n",
    "ERR_clear_error",
    "ERR_print_errors_fp",
    "BIO_new",
    "BIO_free",
    "BIO_free_all",
    "BIO_read",
    "BIO_write",
    "BIO_gets",
    "BIO_puts",
    "BIO_ctrl",
    "BIO_s_mem",
    "BIO_s_file",
    "BIO_new_file",
    "BIO_new_mem_buf",
    "BN_new",
    "BN_free",
    "BN_clear_free",
    "BN_dup",
    "BN_copy",
    "BN_bin2bn",
    "BN_bn2bin",
    "BN_num_bits",
    "BN_set_word",
    "BN_get_word",
    "BN_add",
    "BN_sub",
    "BN_mul",
    "BN_div",
    "BN_mod_exp",
    "BN_cmp",
    "BN_CTX_new",
    "BN_CTX_free",
    "EVP_MD_CTX_new",
    "EVP_MD_CTX_free",
    "EVP_MD_CTX_reset",
    "EVP_DigestInit_ex",
    "EVP_DigestUpdate",
    "EVP_DigestFinal_ex",
    "EVP_Digest",
    "EVP_get_digestbyname",
    "EVP_md5",
    "EVP_sha1",
    "EVP_sha224",
    "EVP_sha256",
    "EVP_sha384",
    "EVP_sha512",
    "EVP_CIPHER_CTX_new",
    "EVP_CIPHER_CTX_free",
    "EVP_CIPHER_CTX_reset",
    "EVP_CIPHER_CTX_ctrl",
    "EVP_EncryptInit_ex",
    "EVP_EncryptUpdate",
    "EVP_EncryptFinal_ex",
    "EVP_DecryptInit_ex",
    "EVP_DecryptUpdate",
    "EVP_DecryptFinal_ex",
    "EVP_CipherInit_ex",
    "EVP_get_cipherbyname",
    "EVP_aes_128_cbc",
    "EVP_aes_192_cbc",
    "EVP_aes_256_cbc",
    "EVP_aes_128_gcm",
    "EVP_aes_256_gcm",
    "EVP_chacha20_poly1305",
    "EVP_PKEY_new",
    "EVP_PKEY_free",
    "EVP_PKEY_up_ref",
    "EVP_PKEY_size",
    "EVP_PKEY_bits",
    "EVP_PKEY_id",
    "EVP_PKEY_CTX_new",
    "EVP_PKEY_CTX_new_id",
    "EVP_PKEY_CTX_free",
    "EVP_PKEY_CTX_ctrl",
    "EVP_PKEY_keygen_init",
    "EVP_PKEY_keygen",
    "EVP_PKEY_sign_init",
    "EVP_PKEY_sign",
    "EVP_PKEY_verify_init",
    "EVP_PKEY_verify",
    "EVP_PKEY_encrypt_init",
    "EVP_PKEY_encrypt",
    "EVP_PKEY_decrypt_init",
    "EVP_PKEY_decrypt",
    "EVP_PKEY_derive_init",
    "EVP_PKEY_derive",
    "HMAC",
    "HMAC_CTX_new",
    "HMAC_CTX_free",
    "HMAC_Init_ex",
    "HMAC_Update",
    "HMAC_Final",
    "RSA_new",
    "RSA_free",
    "RSA_size",
    "RSA_generate_key_ex",
    "RSA_public_encrypt",
    "RSA_private_decrypt",
    "EC_KEY_new",
    "EC_KEY_free",
    "EC_KEY_new_by_curve_name",
    "EC_KEY_generate_key",
    "EC_GROUP_new_by_curve_name",
    "EC_GROUP_free",
    "ECDSA_do_sign",
    "ECDSA_do_verify",
    "DH_new",
    "DH_free",
    "DH_generate_key",
    "X509_new",
    "X509_free",
    "X509_get_subject_name",
    "X509_get_issuer_name",
    "X509_NAME_oneline",
    "X509_verify_cert_error_string",
    "X509_STORE_new",
    "X509_STORE_free",
    "X509_STORE_add_cert",
    "X509_STORE_CTX_new",
    "X509_STORE_CTX_free",
    "X509_STORE_CTX_init",
    "PEM_read_bio_X509",
    "PEM_write_bio_X509",
    "PEM_read_bio_PrivateKey",
    "PEM_write_bio_PrivateKey",
    "d2i_X509",
    "i2d_X509",
    "RAND_bytes",
    "RAND_seed",
    "RAND_status",
    "RAND_add",
    "SHA1",
    "SHA256",
    "SHA512",
    "MD5",
    "OBJ_nid2sn",
    "OBJ_sn2nid",
    "OBJ_txt2nid",
    "OBJ_obj2nid",
    "ASN1_INTEGER_get",
    "ASN1_INTEGER_set",
    "ASN1_STRING_length",
    "ASN1_STRING_get0_data",
    "",
];

pub const SSL_EXPORT_TABLE: &[&str] = &[
    "OPENSSL_init_ssl",
    "TLS_method",
    "TLS_server_method",
    "TLS_client_method",
    "DTLS_method",
    "DTLS_server_method",
    "DTLS_client_method",
    "SSL_CTX_new",
    "SSL_CTX_free",
    "SSL_CTX_up_ref",
    "SSL_CTX_ctrl",
    "SSL_CTX_set_options",
    "SSL_CTX_get_options",
    "SSL_CTX_set_verify",
    "SSL_CTX_set_verify_depth",
    "SSL_CTX_get_verify_mode",
    "SSL_CTX_set_cipher_list",
    "SSL_CTX_set_ciphersuites",
    "SSL_CTX_use_certificate",
    "SSL_CTX_use_certificate_file",
    "SSL_CTX_use_certificate_chain_file",
    "SSL_CTX_use_PrivateKey",
    "SSL_CTX_use_PrivateKey_file",
    "SSL_CTX_check_private_key",
    "SSL_CTX_load_verify_locations",
    "SSL_CTX_set_default_verify_paths",
    "SSL_CTX_set_session_id_context",
    "SSL_CTX_set_client_CA_list",
    "SSL_CTX_set_alpn_protos",
    "SSL_CTX_set_alpn_select_cb",
    "SSL_CTX_set_info_callback",
    "SSL_CTX_set_msg_callback",
    "SSL_CTX_set_keylog_callback",
    "SSL_CTX_get_ex_data",
    "SSL_CTX_set_ex_data",
    "SSL_new",
    "SSL_free",
    "SSL_up_ref",
    "SSL_set_fd",
    "SSL_get_fd",
    "SSL_set_bio",
    "SSL_get_rbio",
    "SSL_get_wbio",
    "SSL_set_connect_state",
    "SSL_set_accept_state",
    "SSL_is_server",
    "SSL_accept",
    "SSL_connect",
    "SSL_do_handshake",
    "SSL_read",
    "SSL_read_ex",
    "SSL_peek",
    "SSL_write",
    "SSL_write_ex",
    "SSL_shutdown",
    "SSL_get_shutdown",
    "SSL_set_shutdown",
    "SSL_clear",
    "SSL_pending",
    "SSL_has_pending",
    "SSL_get_error",
    "SSL_get_version",
    "SSL_version",
    "SSL_ctrl",
    "SSL_get_current_cipher",
    "SSL_CIPHER_get_name",
    "SSL_CIPHER_get_bits",
    "SSL_CIPHER_get_version",
    "SSL_get_peer_certificate",
    "SSL_get_peer_cert_chain",
    "SSL_get_verify_result",
    "SSL_set_verify",
    "SSL_set_cipher_list",
    "SSL_use_certificate",
    "SSL_use_PrivateKey",
    "SSL_get_session",
    "SSL_get1_session",
    "SSL_set_session",
    "SSL_session_reused",
    "SSL_SESSION_new",
    "SSL_SESSION_free",
    "SSL_SESSION_up_ref",
    "SSL_select_next_proto",
    "SSL_get_servername",
    "SSL_get0_alpn_selected",
    "SSL_set_alpn_protos",
    "SSL_load_client_CA_file",
    "SSL_get_client_CA_list",
    "SSL_alert_type_string_long",
    "SSL_alert_desc_string_long",
    "SSL_set_msg_callback",
    "SSL_set_info_callback",
    "SSL_export_keying_material",
    "SSL_renegotiate",
    "SSL_renegotiate_pending",
    "SSL_in_init",
    "SSL_is_init_finished",
    "",
];
